use clap::{Parser, ValueEnum};
use intelterm_core::ThemeName;

#[derive(Parser, Debug)]
#[command(
    name = "intelterm",
    version,
    about = "Access-gated intelligence terminal for a remote query service"
)]
pub struct Cli {
    /// TOML configuration file (defaults to config/intelterm.toml when present)
    #[arg(long)]
    pub config: Option<String>,
    /// Base URL of the answering service; overrides config and environment
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Starting colour theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    /// Write logs to this file (logging is off otherwise, the UI owns the screen)
    #[arg(long)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ThemeArg {
    Green,
    Blue,
    Amber,
}

impl From<ThemeArg> for ThemeName {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Green => ThemeName::Green,
            ThemeArg::Blue => ThemeName::Blue,
            ThemeArg::Amber => ThemeName::Amber,
        }
    }
}
