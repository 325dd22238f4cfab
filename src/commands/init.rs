use std::io::{self, Write};

use crate::config::{Config, DEFAULT_API_BASE};
use crate::error::{Result, ScryError};

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        if !prompt()?.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Scry Configuration");
    println!("==================\n");

    print!("API base URL [{DEFAULT_API_BASE}]: ");
    let api_base = prompt()?;

    print!("User-Agent sent to Scryfall [scry/{}]: ", env!("CARGO_PKG_VERSION"));
    let user_agent = prompt()?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ScryError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let config = Config {
        api_base: Some(api_base).filter(|v| !v.is_empty()),
        user_agent: Some(user_agent).filter(|v| !v.is_empty()),
    };

    std::fs::write(&config_path, config.to_toml()?).map_err(|e| ScryError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());

    Ok(())
}

fn prompt() -> Result<String> {
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
