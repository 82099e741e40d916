//! Template engine for outgoing messages using Jinja2 syntax.
//!
//! Templates live in `templates/` at the project root and are compiled into the
//! binary, so rendering never touches the filesystem at request time.

use minijinja::Environment;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// (template name, source) pairs embedded at build time
const EMBEDDED_TEMPLATES: &[(&str, &str)] = &[
    (
        "notifications/data_violation_title.jinja",
        include_str!("../../../templates/notifications/data_violation_title.jinja"),
    ),
    (
        "notifications/data_violation_body.jinja",
        include_str!("../../../templates/notifications/data_violation_body.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    for &(name, source) in EMBEDDED_TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with any serializable context.
///
/// # Example
/// ```ignore
/// let title = render_template(
///     "notifications/data_violation_title.jinja",
///     minijinja::context! { dataset_name => "Catalogue", report_title => "PII" },
/// )?;
/// ```
pub fn render_template<S: Serialize>(template_name: &str, ctx: S) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
