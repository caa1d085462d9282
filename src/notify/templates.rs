use handlebars::Handlebars;
use serde::Serialize;
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::hooks::HookEvent;

/// The fixed set of values a message template can reference
///
/// Placeholders are case-sensitive: `{{Owner}}`, `{{Repo}}`, `{{Target}}`
/// and `{{UserName}}`. Anything else renders as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateContext {
    pub owner: String,
    pub repo: String,
    pub target: String,
    pub user_name: String,
}

impl From<&HookEvent> for TemplateContext {
    fn from(event: &HookEvent) -> Self {
        Self {
            owner: event.owner.clone(),
            repo: event.repo.clone(),
            target: event.display_target().to_string(),
            user_name: event.user_name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        TemplateEngine { handlebars }
    }

    /// Render a template string against the placeholder context
    pub fn try_render(&self, template: &str, context: &TemplateContext) -> AppResult<String> {
        let template = normalize_placeholders(template);
        self.handlebars
            .render_template(&template, context)
            .map_err(|e| AppError::template_with_source("Failed to render message template", e))
    }

    /// Render a template, delivering it verbatim if it cannot be rendered
    pub fn render(&self, template: &str, context: &TemplateContext) -> String {
        self.try_render(template, context).unwrap_or_else(|e| {
            warn!("Failed to render template {:?}: {}", template, e);
            template.to_string()
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Accept `{{.Owner}}` style placeholders by dropping the leading dot
fn normalize_placeholders(template: &str) -> String {
    template.replace("{{.", "{{").replace("{{ .", "{{ ")
}
