use anyhow::Result;
use std::path::Path;

use crate::config::{ConfigFile, ConfigManager, create_example_config};
use crate::paths::LOCAL_CONFIG_FILE;
use crate::ui::Style;

pub fn run_config(create: bool, show: bool) -> Result<()> {
    if create {
        return create_config(Path::new(LOCAL_CONFIG_FILE));
    }

    if show {
        show_config(&ConfigManager::new());
        return Ok(());
    }

    eprintln!(
        "{}",
        Style::warning("Use --create to create example config or --show to display current config")
    );
    Ok(())
}

fn create_config(path: &Path) -> Result<()> {
    if create_example_config(path)? {
        eprintln!(
            "{} {}",
            Style::success("Created example config file:"),
            path.display()
        );
    } else {
        eprintln!(
            "{} {}",
            Style::warning("Config file already exists:"),
            path.display()
        );
    }
    Ok(())
}

fn show_config(manager: &ConfigManager) {
    let config = manager.load_or_default();
    let path = manager.config_path().display();
    let path = if manager.exists() {
        Style::value(path)
    } else {
        Style::missing(path)
    };

    println!("{}", Style::header("Current Configuration"));
    println!("  {} {path}", Style::label("Config File:"));
    for (label, value) in config_rows(&config) {
        println!("  {} {}", Style::label(format!("{label}:")), Style::value(value));
    }
}

fn config_rows(config: &ConfigFile) -> [(&'static str, String); 6] {
    [
        ("AI Provider", config.ai_provider.to_string()),
        (
            "Model",
            config.model.clone().unwrap_or_else(|| "default".to_string()),
        ),
        ("Light Model", config.light_model.to_string()),
        (
            "Base URL",
            config.ai_base_url.clone().unwrap_or_else(|| "default".to_string()),
        ),
        ("Temperature", config.temperature.to_string()),
        ("Debug", config.debug.to_string()),
    ]
}
