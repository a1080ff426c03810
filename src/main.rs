use clap::Parser;
use site_basics::cli::commands::{cmd_render, cmd_resolve};
use site_basics::cli::config::{Cli, Commands, build_render_options, load_config};
use site_basics::logging::{LogConfig, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    init_logging(&LogConfig::from_verbosity(
        cli.verbose,
        config.logging.level.as_deref(),
    ));

    match cli.command {
        Commands::Render {
            form,
            prefs,
            set,
            format,
            output,
            mode,
            trace,
        } => {
            // Resolve render settings: CLI > config > defaults
            let options = build_render_options(format, mode, output, trace, &config.render);
            let clean = cmd_render(&form, &prefs, &set, &options)?;
            if !clean {
                std::process::exit(2);
            }
        }
        Commands::Resolve { form, prefs, set } => {
            cmd_resolve(&form, &prefs, &set)?;
        }
    }

    Ok(())
}
