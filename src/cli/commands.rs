use std::path::PathBuf;

use crate::cli::config::{RenderOptions, parse_assignment};
use crate::error::ScreenError;
use crate::form::form_model::FormState;
use crate::prefs::snapshot::PreferenceSnapshot;
use crate::report::report_model::format_screen;
use crate::screen::session::ScreenSession;
use crate::text::composer::TemplateMode;
use crate::trace::logger::TraceLogger;

// ============================================================================
// render subcommand
// ============================================================================

/// Render the screen and return whether it composed without diagnostics.
pub fn cmd_render(
    form_path: &str,
    prefs_path: &str,
    set: &[String],
    options: &RenderOptions,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut session = open_session(form_path, prefs_path, options.mode)?;
    if let Some(ref path) = options.trace_file {
        session = session.with_tracer(TraceLogger::open(path)?);
    }

    apply_assignments(&mut session, set)?;
    let screen = session.render()?;
    let content = format_screen(&screen, options.format)?;

    match options.output {
        Some(ref output) => {
            // A directory gets the format's default file name.
            let mut path = PathBuf::from(output);
            if path.is_dir() {
                path.push(options.format.default_file_name());
            }
            std::fs::write(&path, &content).map_err(|source| ScreenError::Io {
                context: format!("writing {}", path.display()),
                source,
            })?;
            tracing::info!(path = %path.display(), format = ?options.format, "report written");
        }
        None => print!("{}", content),
    }

    Ok(screen.diagnostics.is_empty())
}

// ============================================================================
// resolve subcommand
// ============================================================================

pub fn cmd_resolve(
    form_path: &str,
    prefs_path: &str,
    set: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    // Field states never depend on display texts.
    let mut session = open_session(form_path, prefs_path, TemplateMode::Lenient)?;
    apply_assignments(&mut session, set)?;
    let screen = session.render()?;

    let out = serde_json::json!({
        "fingerprint": screen.resolution.fingerprint(),
        "fields": screen.resolution.fields,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

pub fn open_session(
    form_path: &str,
    prefs_path: &str,
    mode: TemplateMode,
) -> Result<ScreenSession, ScreenError> {
    let form = FormState::load(form_path)?;
    let prefs = PreferenceSnapshot::load(prefs_path)?;
    tracing::info!(form = form_path, prefs = prefs_path, ?mode, "session opened");
    Ok(ScreenSession::new(form, prefs, mode))
}

/// Apply `PATH=VALUE` edits in order, stopping at the first rejection.
pub fn apply_assignments(session: &mut ScreenSession, set: &[String]) -> Result<(), ScreenError> {
    for raw in set {
        let (path, value) = parse_assignment(raw)?;
        session.apply_raw(&path, &value)?;
    }
    Ok(())
}
