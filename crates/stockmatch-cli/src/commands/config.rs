use anyhow::Result;

use crate::config::{self, Config};

/// Show the effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!(
        "  catalog_path: {}",
        config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("<bundled>"))
    );
    println!("  fallback_image: {}", config.fallback_image);
    println!("  max_distance: {}", display_limit(config.max_distance));
    println!("  max_results: {}", display_limit(config.max_results));
    println!("  log_level: {:?}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (STOCK_*) > Config file > Defaults");
}

fn display_limit(value: Option<usize>) -> String {
    value.map_or_else(|| String::from("<none>"), |v| v.to_string())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure stockmatch.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
