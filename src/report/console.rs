use crate::field::field_model::FieldState;
use crate::screen::screen_model::{Alert, AlertVariant, Block, FieldView, Screen, WidgetView};

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a rendered screen for the terminal.
///
/// Produces output like:
/// ```text
/// === Site basics ===
/// Configure the basics for your website.
///
/// --- Site info ---
/// [info] You can use Site title, Tagline and Separator as variables ...
/// Site title [read-only]
///     "My site"
/// Title separator
///     ( ) -  (x) |
/// ```
pub fn format_console_report(screen: &Screen) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", screen.title));
    out.push_str(&format!("{}\n", screen.description));

    for section in &screen.sections {
        out.push_str(&format!("\n--- {} ---\n", section.title));
        if let Some(ref description) = section.description {
            out.push_str(&format!("{}\n", description));
        }
        for block in &section.blocks {
            match block {
                Block::Alert(alert) => out.push_str(&format_alert(alert, "")),
                Block::Field(field) => out.push_str(&format_field(field)),
            }
        }
    }

    if !screen.diagnostics.is_empty() {
        out.push_str(&format!("\n=== {} template diagnostics ===\n", screen.diagnostics.len()));
        for d in &screen.diagnostics {
            out.push_str(&format!("    [WARN] {}: {}\n", d.text_id, d.message));
        }
    }

    out
}

fn format_alert(alert: &Alert, indent: &str) -> String {
    let marker = match alert.variant {
        AlertVariant::Info => "[info]",
        AlertVariant::Warning => "[warning]",
    };
    format!("{}{} {}\n", indent, marker, alert.body.to_plain_text())
}

fn format_field(field: &FieldView) -> String {
    let mut out = format!("{}{}\n", field.label, state_marker(&field.state));

    if let Some(ref notice) = field.notice {
        out.push_str(&format_alert(notice, "    "));
    }

    match &field.widget {
        WidgetView::Text { value, .. } => {
            out.push_str(&format!("    \"{}\"\n", value));
        }
        WidgetView::Radio { group } => {
            if group.items.is_empty() {
                out.push_str("    (no options)\n");
            } else {
                let items = group
                    .items
                    .iter()
                    .map(|item| {
                        let mark = if item.checked { "(x)" } else { "( )" };
                        format!("{} {}", mark, item.label)
                    })
                    .collect::<Vec<_>>()
                    .join("  ");
                out.push_str(&format!("    {}\n", items));
            }
        }
        WidgetView::Toggle { checked } => {
            out.push_str(&format!("    [{}]\n", if *checked { "on" } else { "off" }));
        }
        WidgetView::MediaSelect {
            url,
            preview_label,
            ..
        } => {
            let shown = if url.is_empty() { "(no image)" } else { url.as_str() };
            out.push_str(&format!("    {}\n", shown));
            out.push_str(&format!("    {}\n", preview_label.to_plain_text()));
        }
    }

    if let Some(ref description) = field.description {
        out.push_str(&format!("    {}\n", description.to_plain_text()));
    }
    out
}

fn state_marker(state: &FieldState) -> &'static str {
    if !state.enabled {
        " [disabled]"
    } else if !state.editable {
        " [read-only]"
    } else {
        ""
    }
}
