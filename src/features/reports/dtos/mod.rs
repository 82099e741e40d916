mod report_dto;

pub use report_dto::{
    DataViolationExampleDto, ReportAcknowledgementDto, SubmitDataViolationReportDto,
};
