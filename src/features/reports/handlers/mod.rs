pub mod report_handler;

pub use report_handler::{submit_data_violation_report, ReportState};
