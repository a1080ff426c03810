use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::error::ScreenError;
use crate::report::report_model::ReportFormat;
use crate::text::composer::TemplateMode;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "site-basics",
    version,
    about = "Render and edit the site basics settings screen"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: site-basics.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the screen for a form state and preference snapshot
    Render {
        /// YAML/JSON file with the form values
        #[arg(long)]
        form: String,

        /// YAML/JSON file with the preference snapshot
        #[arg(long)]
        prefs: String,

        /// Edit to apply before rendering, as PATH=VALUE (repeatable)
        #[arg(long = "set", value_name = "PATH=VALUE")]
        set: Vec<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Template mismatch handling (default: strict in debug builds)
        #[arg(long, value_enum)]
        mode: Option<TemplateMode>,

        /// Append a JSONL trace event per render pass and edit
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print per-field visibility/enablement as JSON
    Resolve {
        /// YAML/JSON file with the form values
        #[arg(long)]
        form: String,

        /// YAML/JSON file with the preference snapshot
        #[arg(long)]
        prefs: String,

        /// Edit to apply before resolving, as PATH=VALUE (repeatable)
        #[arg(long = "set", value_name = "PATH=VALUE")]
        set: Vec<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `site-basics.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: ReportFormat,

    pub mode: Option<TemplateMode>,

    pub output: Option<String>,

    pub trace_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// error, warn, info, debug or trace
    pub level: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("site-basics.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Resolved options for the render command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: ReportFormat,
    pub mode: TemplateMode,
    pub output: Option<String>,
    pub trace_file: Option<String>,
}

/// CLI > config file > built-in defaults.
pub fn build_render_options(
    format: Option<ReportFormat>,
    mode: Option<TemplateMode>,
    output: Option<String>,
    trace: Option<String>,
    config: &RenderConfig,
) -> RenderOptions {
    RenderOptions {
        format: format.unwrap_or(config.format),
        mode: mode.or(config.mode).unwrap_or_default(),
        output: output.or_else(|| config.output.clone()),
        trace_file: trace.or_else(|| config.trace_file.clone()),
    }
}

/// Split `PATH=VALUE`. The value may be empty or contain further `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), ScreenError> {
    match raw.split_once('=') {
        Some((path, value)) if !path.trim().is_empty() => {
            Ok((path.trim().to_string(), value.to_string()))
        }
        _ => Err(ScreenError::Malformed(format!(
            "expected PATH=VALUE, got '{}'",
            raw
        ))),
    }
}
