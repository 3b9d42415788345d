use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file holding the default values, so they can be
/// edited afterwards. An existing file is kept unless `--force` is given.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if config_path.exists() && !*force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                config_path.display()
            ));
            return Ok(());
        }

        info("Initializing rWorktime…");
        Config::default().save(config_path)?;
        success(format!("Config file: {}", config_path.display()));
    }
    Ok(())
}
