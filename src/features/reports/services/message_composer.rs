use minijinja::context;

use crate::features::reports::models::ValidatedDataViolationReport;
use crate::modules::store::{Organisation, User};
use crate::shared::templates::{render_template, TemplateError};

const TITLE_TEMPLATE: &str = "notifications/data_violation_title.jinja";
const BODY_TEMPLATE: &str = "notifications/data_violation_body.jinja";

/// Human-readable alert for the publisher organisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationNotice {
    pub title: String,
    pub body: String,
}

/// Render the alert for a validated report. Output depends only on the inputs.
pub fn compose_violation_notice(
    reporter: &User,
    reporter_org: &Organisation,
    report: &ValidatedDataViolationReport,
) -> Result<ViolationNotice, TemplateError> {
    let submitted = report.report();
    let dataset = report.dataset();

    let title = render_template(
        TITLE_TEMPLATE,
        context! {
            dataset_name => &dataset.name,
            report_title => &submitted.title,
        },
    )?;

    let body = render_template(
        BODY_TEMPLATE,
        context! {
            reporter_name => &reporter.full_name,
            reporter_org_name => &reporter_org.name,
            reporter_email => &reporter.email,
            category => submitted.category.to_string(),
            dataset_name => &dataset.name,
            dataset_id => &dataset.id,
            description => &submitted.description,
            examples => &submitted.examples,
        },
    )?;

    Ok(ViolationNotice { title, body })
}
