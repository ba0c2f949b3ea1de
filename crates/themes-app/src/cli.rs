use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use themes_config::ExportFormat;

/// Color palettes and CSS overrides for the HighLite client.
#[derive(Parser, Debug)]
#[command(name = "client-themes", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available themes, marking the selected one.
    List,
    /// Select a theme and save the choice.
    Select {
        /// Theme display name, e.g. "Catppuccin - Dark".
        name: String,
    },
    /// Print the stylesheets a host would receive.
    Render {
        /// Render this theme instead of the selected one.
        #[arg(long)]
        theme: Option<String>,

        /// Print the JavaScript a webview host would evaluate instead.
        #[arg(long)]
        script: bool,
    },
    /// Export the custom theme.
    Export {
        #[arg(long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,

        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a custom theme from a JSON file and save it.
    Import { path: PathBuf },
    /// Pretty-print a CSS file.
    Format { path: PathBuf },
    /// Print the settings surface as JSON.
    Settings,
}

impl Command {
    /// Whether the command writes the config file back.
    pub fn saves_config(&self) -> bool {
        matches!(self, Command::Select { .. } | Command::Import { .. })
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// 4-space indented JSON.
    Json,
    /// Clipboard text with a quoted `isDarkMode`.
    Template,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Template => ExportFormat::Template,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
