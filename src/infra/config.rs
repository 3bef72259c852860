use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};

/// Default name of the emitted rank column; spreadsheet users sort by it.
pub const DEFAULT_RANK_FIELD: &str = "LC_SortIndex";

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings for cleaning
    pub clean: CleanConfig,

    /// Default settings for ranking
    pub rank: RankConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    pub output_file: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    pub output_file: String,
    pub rank_field: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clean: CleanConfig::default(),
            rank: RankConfig::default(),
        }
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self { output_file: "cleaned.csv".to_string() }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            output_file: "ranked.csv".to_string(),
            rank_field: DEFAULT_RANK_FIELD.to_string(),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["shelfsort.toml", ".shelfsort.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with SHELFSORT_ prefix
    builder = builder.add_source(config::Environment::with_prefix("SHELFSORT").separator("_"));

    let cfg = builder.build().context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(args: InitArgs, ctx: &AppContext) -> Result<()> {
    let config_path = args.path.join("shelfsort.toml");

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.clean.output_file, "cleaned.csv");
        assert_eq!(config.rank.output_file, "ranked.csv");
        assert_eq!(config.rank.rank_field, DEFAULT_RANK_FIELD);
    }

    #[test]
    fn test_partial_toml_fills_missing_fields() {
        let parsed: Config =
            toml::from_str("[rank]\nrank_field = \"ShelfOrder\"\n").expect("parse");
        assert_eq!(parsed.rank.rank_field, "ShelfOrder");
        assert_eq!(parsed.rank.output_file, "ranked.csv");
        assert_eq!(parsed.clean.output_file, "cleaned.csv");
    }
}
