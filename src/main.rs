//! kvargs - parse `key=value` arguments for a tool described in JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kvargs::{
    generate_json_string, generate_output_string, ArgumentParser, ConfiguredOptions, ParseOutcome,
    ToolConfig,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "KVARGS_LOG";

/// Program name shown in usage when neither --name nor the config sets one.
const FALLBACK_NAME: &str = "tool";

/// Key=value argument parsing for small command-line tools.
#[derive(Parser, Debug)]
#[command(name = "kvargs", version, about, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse tool arguments and print the resulting values
    Parse {
        /// JSON configuration for the target tool
        #[arg(long)]
        config: String,

        /// Program name to report in usage (overrides config)
        #[arg(long)]
        name: Option<String>,

        /// Output format for parsed values
        #[arg(long, value_enum, default_value_t = Format::Shell)]
        format: Format,

        /// Arguments to parse for the target tool
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Print usage text for the target tool
    Usage {
        /// JSON configuration for the target tool
        #[arg(long)]
        config: String,

        /// Program name to report in usage (overrides config)
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// `export NAME="value"` lines
    Shell,
    /// A JSON object
    Json,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(json: &str) -> Result<ToolConfig> {
    let cfg = ToolConfig::from_json(json).context("failed to parse config JSON")?;
    cfg.validate().context("invalid config")?;
    Ok(cfg)
}

fn effective_name(name: Option<String>, cfg: &ToolConfig) -> String {
    name.or_else(|| cfg.name.clone())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            config,
            name,
            format,
            args,
        } => {
            let cfg = load_config(&config)?;
            let prefix = cfg.effective_prefix().to_string();
            let mut argv = vec![effective_name(name, &cfg)];
            argv.extend(args);

            let mut parser =
                ArgumentParser::with_config(ConfiguredOptions::new(cfg.clone()), cfg.parser_config());
            let outcome = parser.parse(&argv).context("failed to write output")?;
            if let Some(code) = outcome.exit_code() {
                if let ParseOutcome::Fatal(ref err) = outcome {
                    tracing::debug!(%err, "parse failed");
                }
                std::process::exit(code);
            }

            let values = parser.extension().values();
            match format {
                Format::Shell => print!("{}", generate_output_string(&values, &prefix)),
                Format::Json => print!(
                    "{}",
                    generate_json_string(&values).context("failed to encode values")?
                ),
            }
        }
        Commands::Usage { config, name } => {
            let cfg = load_config(&config)?;
            let mut parser = ArgumentParser::with_config(
                ConfiguredOptions::new(cfg.clone()),
                cfg.parser_config(),
            );
            let argv = [effective_name(name, &cfg)];
            // a lone program name only records it
            parser.parse(&argv).context("failed to write output")?;
            parser.print_usage().context("failed to write usage")?;
        }
    }

    Ok(())
}
