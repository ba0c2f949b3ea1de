mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use themes_app::{ClientThemes, MemoryHost, ScriptHost, CSS_STYLE_ID, THEME_STYLE_ID};
use themes_common::{ClientThemesError, ConfigError, ThemeError};
use themes_config::toml_loader::default_config_path;
use themes_config::ThemesConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// The binary logs as `client_themes`, the library crates as `themes_*`.
const DEFAULT_LOG_DIRECTIVES: [&str; 2] = ["client_themes=info", "themes=info"];

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let mut filter = EnvFilter::from_default_env();
    match args.log_level.as_deref().map(str::parse::<Directive>) {
        Some(Ok(directive)) => filter = filter.add_directive(directive),
        invalid => {
            if let Some(Err(e)) = invalid {
                eprintln!("invalid --log-level ({e}), using defaults");
            }
            for directive in DEFAULT_LOG_DIRECTIVES {
                filter = filter.add_directive(directive.parse().unwrap());
            }
        }
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    tracing::debug!("client-themes v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> themes_common::Result<()> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = load(args.config.as_deref(), args.command.saves_config())?;
    tracing::debug!(theme = %config.theme.name, "Config loaded");

    let themes = ClientThemes::new(config, MemoryHost::new());

    match args.command {
        Command::List => {
            for name in themes.registry().names() {
                let marker = if name == themes.selected_theme() { "*" } else { " " };
                println!("{marker} {name}");
            }
        }
        Command::Select { name } => {
            let mut themes = themes.with_config_path(config_path(args.config)?);
            themes.select_theme(&name)?;
            println!("Selected theme: {name}");
        }
        Command::Render { theme, script } => {
            let mut config = themes.config().clone();
            if let Some(name) = theme {
                if themes.registry().get_by_name(&name).is_none() {
                    return Err(ThemeError::NotFound(name).into());
                }
                config.theme.name = name;
            }

            if script {
                let host = ScriptHost::new(|js: &str| {
                    println!("{js}");
                    Ok(())
                });
                ClientThemes::new(config, host).start();
            } else {
                let mut themes = ClientThemes::new(config, MemoryHost::new());
                themes.start();
                print_styles(&themes.into_host());
            }
        }
        Command::Export { format, output } => {
            let text = themes.export_theme(format.into())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &text)?;
                    tracing::info!("Exported custom theme to {}", path.display());
                }
                None => println!("{text}"),
            }
        }
        Command::Import { path } => {
            let text = std::fs::read_to_string(&path)?;
            let mut themes = themes.with_config_path(config_path(args.config)?);
            themes.import_theme(&text)?;
            println!("Imported custom theme from {}", path.display());
        }
        Command::Format { path } => {
            let css = std::fs::read_to_string(&path)?;
            println!("{}", themes_css::format_css(&css));
        }
        Command::Settings => {
            let json = serde_json::to_string_pretty(&themes.settings()).map_err(|e| {
                ClientThemesError::Other(format!("failed to serialize settings: {e}"))
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Load the config for a command.
///
/// Read-only commands fall back to defaults when the file is broken.
/// Commands that save do not: saving those defaults would replace the
/// user's file, so the load error is returned instead. A file that does not
/// exist yet is fine for both.
fn load(path: Option<&Path>, saves: bool) -> themes_common::Result<ThemesConfig> {
    match themes_config::load_config(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(path)) => {
            tracing::info!(path = %path.display(), "No config file yet, using defaults");
            Ok(ThemesConfig::default())
        }
        Err(e) if saves => Err(e.into()),
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            Ok(ThemesConfig::default())
        }
    }
}

fn print_styles(host: &MemoryHost) {
    if let Some(css) = host.style(THEME_STYLE_ID) {
        println!("/* #{THEME_STYLE_ID} */\n{css}");
    }
    if let Some(css) = host.style(CSS_STYLE_ID).filter(|css| !css.trim().is_empty()) {
        println!("\n/* #{CSS_STYLE_ID} */\n{}", themes_css::format_css(css));
    }
}

/// Where changes made from the command line are saved.
fn config_path(override_path: Option<PathBuf>) -> themes_common::Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => Ok(default_config_path()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const BROKEN_CONFIG: &str = r##"[theme]
name = "Custom"

[custom]
accent = "#11dd22"
background = "#525252

[css]
custom = ".hs-chat { color: red; }"
"##;

    fn args(config: &Path, rest: &[&str]) -> Args {
        let config = config.to_str().unwrap();
        let argv = ["client-themes", "--config", config].into_iter().chain(rest.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn select_refuses_to_overwrite_unreadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BROKEN_CONFIG).unwrap();

        let err = run(args(&path, &["select", "Dracula"])).unwrap_err();
        assert!(matches!(
            err,
            ClientThemesError::Config(ConfigError::ParseError(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BROKEN_CONFIG);
    }

    #[test]
    fn import_refuses_to_overwrite_unreadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BROKEN_CONFIG).unwrap();

        let theme = dir.path().join("theme.json");
        let export = themes_config::export_theme(
            ClientThemes::new(ThemesConfig::default(), MemoryHost::new())
                .registry()
                .custom(),
            themes_config::ExportFormat::Json,
        )
        .unwrap();
        std::fs::write(&theme, export).unwrap();

        let err = run(args(&path, &["import", theme.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ClientThemesError::Config(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BROKEN_CONFIG);
    }

    #[test]
    fn read_only_commands_still_run_on_unreadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, BROKEN_CONFIG).unwrap();

        assert!(run(args(&path, &["list"])).is_ok());
        assert!(run(args(&path, &["export"])).is_ok());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BROKEN_CONFIG);
    }

    #[test]
    fn select_creates_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client-themes").join("config.toml");

        run(args(&path, &["select", "Dracula"])).unwrap();

        let saved = themes_config::load_config(Some(path.as_path())).unwrap();
        assert_eq!(saved.theme.name, "Dracula");
    }

    #[test]
    fn select_keeps_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[custom]\naccent = \"#11dd22\"\n\n[css]\ncustom = \".a { color: red; }\"\n",
        )
        .unwrap();

        run(args(&path, &["select", "Nord - Dark"])).unwrap();

        let saved = themes_config::load_config(Some(path.as_path())).unwrap();
        assert_eq!(saved.theme.name, "Nord - Dark");
        assert_eq!(saved.custom.accent, "#11dd22");
        assert_eq!(saved.css.custom, ".a { color: red; }");
    }

    #[test]
    fn render_unknown_theme_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = run(args(&path, &["render", "--theme", "Solarized"])).unwrap_err();
        assert!(matches!(err, ClientThemesError::Theme(ThemeError::NotFound(_))));
    }
}
