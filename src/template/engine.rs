use chrono::{DateTime, Utc};
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use thiserror::Error;

use super::types::Page;

const HEADER: &str = include_str!("../../templates/partials/header.hbs");
const FOOTER: &str = include_str!("../../templates/partials/footer.hbs");

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Compile(#[from] handlebars::TemplateError),
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// `2024-03-01T09:30:00Z` as `2024-03-01 09:30`; anything else unchanged.
fn format_timestamp(value: &str) -> String {
    match value.parse::<DateTime<Utc>>() {
        Ok(at) if at.timestamp() == 0 => "never".to_string(),
        Ok(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

handlebars_helper!(date_helper: |value: str| format_timestamp(value));

pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Register the layout partials and every page.
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_partial("header", HEADER)?;
        handlebars.register_partial("footer", FOOTER)?;
        for page in Page::ALL {
            handlebars.register_template_string(page.name(), page.source())?;
        }
        handlebars.register_helper("date", Box::new(date_helper));
        Ok(Self { handlebars })
    }

    pub fn render<T: Serialize>(&self, page: Page, context: &T) -> Result<String, TemplateError> {
        self.handlebars
            .render(page.name(), context)
            .map_err(TemplateError::from)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
