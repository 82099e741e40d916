mod report;

pub use report::{
    DataViolationCategory, DataViolationExample, DataViolationReport, ReportType,
    ValidatedDataViolationReport,
};
