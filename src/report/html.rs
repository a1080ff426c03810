use crate::screen::screen_model::{Alert, AlertVariant, Block, FieldView, Screen, WidgetView};
use crate::text::rich_text::escape_html;

// ============================================================================
// HTML reporter: self-contained HTML page
// ============================================================================

/// Generate a self-contained HTML rendition of the screen.
///
/// Inline CSS, no scripts. Read-only and disabled fields carry the
/// matching HTML attributes. All text is escaped; separator labels keep
/// character references like `&ndash;` or `&#124;` and nothing else.
pub fn generate_html_report(screen: &Screen) -> String {
    let mut sections = String::new();
    for section in &screen.sections {
        sections.push_str("<fieldset class=\"section\">\n");
        sections.push_str(&format!("<legend>{}</legend>\n", escape_html(&section.title)));
        if let Some(ref description) = section.description {
            sections.push_str(&format!(
                "<p class=\"description\">{}</p>\n",
                escape_html(description)
            ));
        }
        for block in &section.blocks {
            match block {
                Block::Alert(alert) => sections.push_str(&render_alert(alert)),
                Block::Field(field) => sections.push_str(&render_field(field)),
            }
        }
        sections.push_str("</fieldset>\n");
    }

    let mut diagnostics = String::new();
    if !screen.diagnostics.is_empty() {
        diagnostics.push_str("<ul class=\"diagnostics\">\n");
        for d in &screen.diagnostics {
            diagnostics.push_str(&format!(
                "<li>{}: {}</li>\n",
                escape_html(&d.text_id),
                escape_html(&d.message)
            ));
        }
        diagnostics.push_str("</ul>\n");
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }}
.header {{ background: #a61e69; color: white; padding: 20px 30px; }}
.header h1 {{ margin: 0 0 8px 0; font-size: 24px; }}
.header p {{ margin: 0; font-size: 16px; opacity: 0.9; }}
.content {{ max-width: 900px; margin: 20px auto; padding: 0 20px; }}
.section {{ background: white; border: 0; border-radius: 6px; padding: 16px 20px; margin-bottom: 12px; }}
.section legend {{ font-weight: bold; font-size: 18px; }}
.description {{ color: #666; font-size: 14px; }}
.alert {{ border-radius: 4px; padding: 8px 12px; margin: 8px 0; font-size: 14px; }}
.alert.info {{ background: #e3f2fd; }}
.alert.warning {{ background: #fff8e1; }}
.field {{ margin: 16px 0; }}
.field label {{ display: block; font-weight: 600; margin-bottom: 4px; }}
.diagnostics li {{ color: #c62828; font-size: 13px; }}
</style>
</head>
<body>
<div class="header">
<h1>{title}</h1>
<p>{description}</p>
</div>
<div class="content">
{sections}{diagnostics}</div>
</body>
</html>
"##,
        title = escape_html(&screen.title),
        description = escape_html(&screen.description),
        sections = sections,
        diagnostics = diagnostics,
    )
}

fn render_alert(alert: &Alert) -> String {
    let variant = match alert.variant {
        AlertVariant::Info => "info",
        AlertVariant::Warning => "warning",
    };
    let id = alert
        .id
        .as_ref()
        .map(|id| format!(" id=\"{}\"", escape_html(id)))
        .unwrap_or_default();
    format!(
        "<div class=\"alert {}\"{}>{}</div>\n",
        variant,
        id,
        alert.body.to_html()
    )
}

fn render_field(field: &FieldView) -> String {
    let mut out = String::from("<div class=\"field\">\n");
    let id = escape_html(&field.id);
    let name = escape_html(field.path.as_str());

    if let Some(ref notice) = field.notice {
        out.push_str(&render_alert(notice));
    }

    match &field.widget {
        WidgetView::Text { value, read_only } => {
            out.push_str(&format!("<label for=\"{}\">{}</label>\n", id, escape_html(&field.label)));
            out.push_str(&format!(
                "<input type=\"text\" id=\"{}\" name=\"{}\" value=\"{}\"{}>\n",
                id,
                name,
                escape_html(value),
                if *read_only { " readonly" } else { "" }
            ));
        }
        WidgetView::Radio { group } => {
            out.push_str(&format!("<span class=\"label\">{}</span>\n", escape_html(&field.label)));
            for item in &group.items {
                // Labels may carry entities such as `&ndash;`.
                out.push_str(&format!(
                    "<input type=\"radio\" id=\"{id}\" name=\"{name}\" value=\"{value}\" aria-label=\"{aria}\"{checked}><label for=\"{id}\">{label}</label>\n",
                    id = escape_html(&item.id),
                    name = name,
                    value = escape_html(&item.value),
                    aria = escape_html(&item.aria_label),
                    checked = if item.checked { " checked" } else { "" },
                    label = escape_label(&item.label),
                ));
            }
        }
        WidgetView::Toggle { checked } => {
            out.push_str(&format!(
                "<input type=\"checkbox\" role=\"switch\" id=\"{}\" name=\"{}\"{}><label for=\"{}\">{}</label>\n",
                id,
                name,
                if *checked { " checked" } else { "" },
                id,
                escape_html(&field.label)
            ));
        }
        WidgetView::MediaSelect {
            url,
            preview_label,
            disabled,
            ..
        } => {
            out.push_str(&format!("<label for=\"{}\">{}</label>\n", id, escape_html(&field.label)));
            if !url.is_empty() {
                out.push_str(&format!("<img src=\"{}\" alt=\"\">\n", escape_html(url)));
            }
            out.push_str(&format!("<p class=\"description\">{}</p>\n", preview_label.to_html()));
            out.push_str(&format!(
                "<button type=\"button\" id=\"{}\"{}>Select image</button>\n",
                id,
                if *disabled { " disabled" } else { "" }
            ));
        }
    }

    if let Some(ref description) = field.description {
        out.push_str(&format!("<p class=\"description\">{}</p>\n", description.to_html()));
    }
    out.push_str("</div>\n");
    out
}

/// Escape like `escape_html`, but pass through well-formed character
/// references (`&name;`, `&#123;`, `&#x7c;`).
fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut rest = label;
    while let Some(amp) = rest.find('&') {
        out.push_str(&escape_html(&rest[..amp]));
        let tail = &rest[amp..];
        match entity_len(tail) {
            Some(len) => {
                out.push_str(&tail[..len]);
                rest = &tail[len..];
            }
            None => {
                out.push_str("&amp;");
                rest = &tail[1..];
            }
        }
    }
    out.push_str(&escape_html(rest));
    out
}

/// Length of the character reference at the start of `s`, including `&` and `;`.
fn entity_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('&')?;
    let end = body.find(';')?;
    let name = &body[..end];
    let valid = if let Some(num) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        !num.is_empty() && num.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(num) = name.strip_prefix('#') {
        !num.is_empty() && num.chars().all(|c| c.is_ascii_digit())
    } else {
        !name.is_empty() && name.len() <= 32 && name.chars().all(|c| c.is_ascii_alphanumeric())
    };
    valid.then_some(end + 2)
}
