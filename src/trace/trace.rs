use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::field::resolver::Resolution;
use crate::text::composer::Diagnostic;

/// One line of the render trace: a render pass or an attempted edit.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub pass: u64,

    pub action: Option<String>,
    pub rejection: Option<String>,

    pub fingerprint: Option<String>,
    pub fields: Vec<String>,

    pub cache_hit: Option<bool>,
    pub diagnostics: Vec<String>,
}

impl TraceEvent {
    pub fn now(pass: u64) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            pass,
            action: None,
            rejection: None,
            fingerprint: None,
            fields: vec![],
            cache_hit: None,
            diagnostics: vec![],
        }
    }

    /// Record the fingerprint and a compact per-field summary.
    pub fn with_resolution(mut self, resolution: &Resolution) -> Self {
        self.fingerprint = Some(resolution.fingerprint());
        self.fields = resolution
            .fields
            .iter()
            .map(|f| {
                let mode = if !f.state.visible {
                    "hidden"
                } else if !f.state.enabled {
                    "disabled"
                } else if !f.state.editable {
                    "read-only"
                } else {
                    "editable"
                };
                format!("{}: {}", f.path, mode)
            })
            .collect();
        self
    }

    pub fn with_action(mut self, action: impl ToString) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn with_rejection(mut self, reason: impl ToString) -> Self {
        self.rejection = Some(reason.to_string());
        self
    }

    pub fn with_cache_hit(mut self, hit: bool) -> Self {
        self.cache_hit = Some(hit);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: &[Diagnostic]) -> Self {
        self.diagnostics = diagnostics
            .iter()
            .map(|d| format!("{}: {}", d.text_id, d.message))
            .collect();
        self
    }
}
