mod message_composer;
mod report_service;
mod report_validator;

pub use message_composer::compose_violation_notice;
pub use report_service::ReportService;
pub use report_validator::ReportValidator;
