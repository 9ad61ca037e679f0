use anyhow::{bail, Context};
use clap::Parser;
use tool_server_env::output::{self, OutputFormat};
use tool_server_env::{validate_port, ToolServerConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve tool server port and token for a container entrypoint")]
struct Args {
    /// Output format for the resolved settings
    #[arg(long, value_enum, default_value_t = OutputFormat::Shell)]
    format: OutputFormat,

    /// Skip loading a `.env` file from the working directory
    #[arg(long)]
    no_dotenv: bool,

    /// Only check that VALUE is a digits-only port string, then exit.
    /// This check has no range limit; resolving the config also rejects ports above 65535.
    #[arg(long, value_name = "VALUE")]
    check_port: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout is reserved for the rendered settings.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Some(value) = args.check_port {
        if !validate_port(&value) {
            error!(value = %value, "Port is not a valid integer");
            bail!("invalid port format: {value:?}");
        }
        info!(value = %value, "Port is valid");
        return Ok(());
    }

    if !args.no_dotenv {
        dotenvy::dotenv().ok();
    }

    let cfg = ToolServerConfig::from_env()
        .context("failed to resolve tool server configuration")?;
    let rendered = output::render(&cfg, args.format).context("failed to render settings")?;
    print!("{rendered}");
    Ok(())
}
