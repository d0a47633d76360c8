use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use odometer_core::AppConfig;

pub fn run(config: &AppConfig, path: &Path, write: bool) -> Result<()> {
    let content = config.to_toml()?;
    print!("{}", content);

    if write {
        config
            .save_to(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote config to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_round_trips() {
        let dir = std::env::temp_dir().join(format!("odometer-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.odometer.density = 4;
        run(&config, &path, true).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.odometer.density, 4);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
