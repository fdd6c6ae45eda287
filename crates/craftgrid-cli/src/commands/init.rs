//! `craftgrid init`: create a default configuration file, optionally with a
//! copy of the starter catalog to edit.

use std::{
    fs,
    path::{Path, PathBuf},
};

use craftgrid_adapters::BuiltinCatalog;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default craftgrid configuration file.
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    // Check everything before writing anything.
    ensure_writable(&config_path, args.force)?;
    if let Some(catalog) = &args.catalog {
        ensure_writable(catalog, args.force)?;
    }

    let mut config = AppConfig::default();
    if let Some(catalog) = &args.catalog {
        write_file(catalog, BuiltinCatalog::json())?;
        let absolute = fs::canonicalize(catalog)
            .with_cli_context(|| format!("Failed to resolve '{}'", catalog.display()))?;
        output.success(&format!("Starter catalog written to {}", absolute.display()))?;
        config.catalog.path = Some(absolute);
    }

    let toml = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;
    write_file(&config_path, &toml)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::FileExists {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create directory '{}'", parent.display())
        })?;
    }

    fs::write(path, contents)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))
}
