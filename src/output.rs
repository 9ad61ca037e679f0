//! Rendering a resolved configuration for the entrypoint script.
//!
//! The shell form is meant to be consumed with `eval "$(tool-server-env)"`,
//! so every token value is single-quoted.

use crate::config::{ToolServerConfig, PORT_ENV, TOKEN_ENV};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Shell,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedView<'a> {
    port: u16,
    token: &'a str,
    token_generated: bool,
}

pub fn render(cfg: &ToolServerConfig, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Shell => Ok(format!(
            "export {PORT_ENV}={}\nexport {TOKEN_ENV}={}\n",
            cfg.port,
            shell_quote(&cfg.token)
        )),
        OutputFormat::Json => {
            let view = ResolvedView {
                port: cfg.port,
                token: &cfg.token,
                token_generated: cfg.token_generated,
            };
            let mut out = serde_json::to_string(&view)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
