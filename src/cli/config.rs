//! Config command handlers.

use crate::config::{
    Validatable, discover_config_file, generate_example_config, generate_json_schema,
    load_or_default,
};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Print the effective configuration (defaults merged with the file).
pub fn run_config_show(explicit: Option<&Path>) -> Result<()> {
    let (config, loaded_from) = load_or_default(explicit);
    match &loaded_from {
        Some(path) => eprintln!("# Loaded from: {}", path.display()),
        None => eprintln!("# No config file found; showing defaults"),
    }
    for error in config.validate() {
        eprintln!("# warning: {error}");
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

/// Print the search order and the config file in effect.
pub fn run_config_path(explicit: Option<&Path>) {
    let search_paths = [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|p| p.join("index-view")),
        dirs::home_dir(),
    ];
    eprintln!("Config file search paths (in order):");
    for path in search_paths.into_iter().flatten() {
        eprintln!("  {}", path.display());
    }
    match discover_config_file(explicit) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
}

/// Write an example `.index-view.yaml` into `dir`.
pub fn run_config_init(dir: &Path, force: bool) -> Result<PathBuf> {
    let target = dir.join(".index-view.yaml");
    if target.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite it.",
            target.display()
        );
    }
    std::fs::write(&target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    eprintln!("Created {}", target.display());
    Ok(target)
}

/// Print or write the config JSON schema.
pub fn run_config_schema(output: Option<&Path>) -> Result<()> {
    let schema = generate_json_schema()?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_file;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let tmp = TempDir::new().unwrap();
        let path = run_config_init(tmp.path(), false).unwrap();
        let config = load_config_file(&path).unwrap();
        assert!(config.is_valid());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        run_config_init(tmp.path(), false).unwrap();
        assert!(run_config_init(tmp.path(), false).is_err());
        assert!(run_config_init(tmp.path(), true).is_ok());
    }

    #[test]
    fn test_schema_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("schema.json");
        run_config_schema(Some(&path)).unwrap();
        let schema: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(schema["properties"]["tui"].is_object());
    }
}
