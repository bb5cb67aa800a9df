use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialise tracing once. Without a log file the filter is `off`, since
/// anything written to the terminal would tear through the UI.
pub fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    static INIT: Once = Once::new();

    let file = log_file.map(File::create).transpose()?;
    INIT.call_once(|| match file {
        Some(file) => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_level(true)
                .init();
        }
        None => {
            fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(io::stderr)
                .init();
        }
    });
    Ok(())
}
