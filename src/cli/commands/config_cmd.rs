//! config command - Get, set, or list configuration values

use anyhow::{Context as _, Result};

use crate::core::config::{Config, KEYS};
use crate::engine::Context;

/// Get a configuration value.
///
/// Prints nothing when the key is valid but unset.
pub fn get(_ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    if let Some(value) = config.global.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let mut global = config.global.clone();
    global.set(key, value)?;

    let path = config.write_path()?;
    Config::write(&path, &global).context("Failed to write config")?;

    if !ctx.quiet {
        println!("Set {} = {}", key, value);
    }

    Ok(())
}

/// List all configuration values.
pub fn list(_ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    match config.loaded_from() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# No config file; showing defaults"),
    }

    for key in KEYS {
        match config.global.get(key)? {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = (not set)", key),
        }
    }

    Ok(())
}
