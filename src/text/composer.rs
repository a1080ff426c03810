use serde::{Deserialize, Serialize};

use crate::error::ScreenError;
use crate::text::interpolate::{TagMap, interpolate};
use crate::text::rich_text::RichText;
use crate::text::template::{Fragment, Template, TemplateError};

/// What to do when a template and its substitutions disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TemplateMode {
    /// Fail the render with `ScreenError::Template`.
    Strict,
    /// Log, record a diagnostic, and show the raw template text.
    Lenient,
}

impl Default for TemplateMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            TemplateMode::Strict
        } else {
            TemplateMode::Lenient
        }
    }
}

/// A composition failure that was degraded to raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub text_id: String,
    pub template: String,
    pub message: String,
}

/// Composes display texts, applying the configured `TemplateMode`.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    mode: TemplateMode,
    diagnostics: Vec<Diagnostic>,
}

impl Composer {
    pub fn new(mode: TemplateMode) -> Self {
        Self {
            mode,
            diagnostics: Vec::new(),
        }
    }

    pub fn mode(&self) -> TemplateMode {
        self.mode
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// `sprintf` the template with string args, then turn the resulting tag
    /// markers into elements.
    pub fn markup(
        &mut self,
        text_id: &str,
        template: &str,
        args: &[&str],
        tags: &TagMap,
    ) -> Result<RichText, ScreenError> {
        let outcome = Template::parse(template)
            .and_then(|t| t.format(args))
            .and_then(|formatted| interpolate(&formatted, tags));
        self.settle(text_id, template, outcome)
    }

    /// Fill the template's slots with text or markup fragments.
    pub fn fill(
        &mut self,
        text_id: &str,
        template: &str,
        fragments: &[Fragment],
    ) -> Result<RichText, ScreenError> {
        let outcome = Template::parse(template).and_then(|t| t.fill(fragments));
        self.settle(text_id, template, outcome)
    }

    fn settle(
        &mut self,
        text_id: &str,
        template: &str,
        outcome: Result<RichText, TemplateError>,
    ) -> Result<RichText, ScreenError> {
        let error = match outcome {
            Ok(rt) => return Ok(rt),
            Err(e) => e,
        };

        match self.mode {
            TemplateMode::Strict => {
                tracing::error!(text_id, error = %error, "template composition failed");
                Err(ScreenError::Template {
                    text_id: text_id.to_string(),
                    source: error,
                })
            }
            TemplateMode::Lenient => {
                tracing::warn!(text_id, error = %error, "template composition failed, showing raw text");
                self.diagnostics.push(Diagnostic {
                    text_id: text_id.to_string(),
                    template: template.to_string(),
                    message: error.to_string(),
                });
                Ok(RichText::plain(template))
            }
        }
    }
}
