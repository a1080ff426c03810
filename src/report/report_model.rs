use serde::{Deserialize, Serialize};

use crate::error::ScreenError;
use crate::report::console::format_console_report;
use crate::report::html::generate_html_report;
use crate::screen::screen_model::Screen;

/// Output format for a rendered screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Console,
    Html,
    Json,
}

impl ReportFormat {
    /// Default file name when writing this format to disk.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Console => "site-basics.txt",
            ReportFormat::Html => "site-basics.html",
            ReportFormat::Json => "site-basics.json",
        }
    }
}

pub fn format_screen(screen: &Screen, format: ReportFormat) -> Result<String, ScreenError> {
    match format {
        ReportFormat::Console => Ok(format_console_report(screen)),
        ReportFormat::Html => Ok(generate_html_report(screen)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(screen).map_err(|source| ScreenError::Json {
                context: "screen report".to_string(),
                source,
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}
