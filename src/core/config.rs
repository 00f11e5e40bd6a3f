use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the config file. Returns how many are missing.
    pub fn check() -> AppResult<usize> {
        let path = Config::config_file();

        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use). Run `init` to create one.",
                path.display()
            ));
            return Ok(0);
        }

        let missing = missing_keys(&path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("Run `config --migrate` to add them with default values.");
        }
        Ok(missing.len())
    }

    pub fn migrate() -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "no configuration file at {}",
                path.display()
            )));
        }
        migrate_config(&path)?;
        Ok(())
    }

    /// Open the config file in `editor`, $EDITOR/$VISUAL, or the platform default.
    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let path = Config::config_file();

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    requested
                ));
                Ok(())
            }
            _ if requested != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    requested, default_editor
                ));
                Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(_) => Err(AppError::Config(format!(
                "editor '{}' exited with an error",
                requested
            ))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
