pub mod cli;
mod logging;
pub mod tui;

pub use cli::{Cli, ThemeArg};

use intelterm_core::{AppConfig, HttpQueryClient, QueryTransport, TerminalSession};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    logging::init_tracing(cli.log_file.as_deref().map(Path::new))?;
    info!("Starting intelterm");
    debug!(config = ?cli.config, endpoint = ?cli.endpoint, theme = ?cli.theme, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }

    if let Some(endpoint) = cli.endpoint.clone() {
        info!(endpoint = %endpoint, "Overriding endpoint based on CLI flag");
        config = config.with_endpoint(endpoint)?;
    }
    if let Some(theme) = cli.theme {
        config = config.with_theme(theme.into());
    }

    let client = HttpQueryClient::new(&config.endpoint);
    info!(url = client.url(), "Query transport ready");
    let transport: Arc<dyn QueryTransport> = Arc::new(client);

    let session = TerminalSession::new(&config);
    tui::run_terminal(session, transport).await?;

    info!("Terminal closed");
    Ok(())
}
