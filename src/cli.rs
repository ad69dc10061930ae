/*
 * Command Line Module
 *
 * Command line overrides for the field configuration. Flags win over values
 * loaded from the config file.
 */

use std::path::PathBuf;

use clap::Parser;

use crate::config::FieldConfig;
use crate::error::Result;

#[derive(Parser, Debug, Default)]
#[command(name = "particle-field", about = "An ambient drifting particle field")]
pub struct Cli {
    /// TOML file with field settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pixel area per particle (px²)
    #[arg(long)]
    pub density: Option<f32>,

    /// Show the debug overlay
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn resolve_config(&self) -> Result<FieldConfig> {
        let mut config = match &self.config {
            Some(path) => FieldConfig::load(path)?,
            None => FieldConfig::default(),
        };

        if let Some(density) = self.density {
            config.density = density;
        }
        if self.debug {
            config.show_debug = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[test]
    fn no_flags_gives_defaults() {
        let cli = Cli::try_parse_from(["particle-field"]).unwrap();
        assert_eq!(cli.resolve_config().unwrap(), FieldConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["particle-field", "--density", "2500", "--debug"]).unwrap();
        let config = cli.resolve_config().unwrap();

        assert!((config.density - 2500.0).abs() < f32::EPSILON);
        assert!(config.show_debug);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = Cli::try_parse_from(["particle-field", "--density", "0"]).unwrap();
        assert!(matches!(
            cli.resolve_config(),
            Err(FieldError::InvalidConfig { field: "density", .. })
        ));
    }

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("particle-field-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "density = 5000.0\nshow_debug = false\n").unwrap();

        let cli = Cli {
            config: Some(path.clone()),
            density: Some(20_000.0),
            debug: true,
        };
        let config = cli.resolve_config();
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert!((config.density - 20_000.0).abs() < f32::EPSILON);
        assert!(config.show_debug);
    }
}
