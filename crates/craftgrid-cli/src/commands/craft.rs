//! `craftgrid craft`: resolve a grid to a recipe.

use std::{io, path::Path};

use tracing::{debug, instrument};

use craftgrid_adapters::{parse_grid, read_grid_file};
use craftgrid_core::{
    application::CraftingService,
    domain::{CraftingGrid, MatchResult},
};

use crate::{
    cli::{CraftArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Resolve the grid and print what it makes.
#[instrument(skip_all)]
pub fn execute(args: CraftArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let grid = read_input(&args)?;
    debug!(rows = grid.height(), cols = grid.width(), "grid parsed");

    let store = super::load_store(&args.catalog, config)?;
    let service = CraftingService::new(Box::new(store))
        .with_table_size(super::table_size(&args.catalog, config));

    let matches = if args.all {
        service.craft_all(&grid)?
    } else {
        service.craft(&grid)?.into_iter().collect()
    };

    if matches.is_empty() {
        return Err(CliError::NoMatch);
    }
    report(&matches, args.all, output)
}

fn read_input(args: &CraftArgs) -> CliResult<CraftingGrid> {
    if let Some(inline) = &args.grid {
        return parse_grid(inline).map_err(|e| CliError::InvalidGrid {
            origin: "--grid".into(),
            reason: e.to_string(),
        });
    }

    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => Ok(read_grid_file(path)?),
        _ => {
            let raw = io::read_to_string(io::stdin()).with_cli_context(|| "reading grid from stdin")?;
            parse_grid(&raw).map_err(|e| CliError::InvalidGrid {
                origin: "stdin".into(),
                reason: e.to_string(),
            })
        }
    }
}

fn report(matches: &[MatchResult], all: bool, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json if all => output.json(matches)?,
        OutputFormat::Json => output.json(&matches[0])?,
        OutputFormat::Human if !output.is_quiet() => {
            for found in matches {
                output.success(&format!("{} (variant {})", found.group, found.id))?;
            }
        }
        // Quiet human output falls back to the bare `group#id` lines.
        OutputFormat::Human | OutputFormat::Plain | OutputFormat::Auto => {
            for found in matches {
                output.data(&found.to_string())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CatalogArgs;

    fn inline(grid: &str) -> CraftArgs {
        CraftArgs {
            file: None,
            grid: Some(grid.into()),
            all: false,
            catalog: CatalogArgs::default(),
        }
    }

    #[test]
    fn inline_grid_is_parsed() {
        let grid = read_input(&inline("_ coal; _ stick")).unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
    }

    #[test]
    fn ragged_inline_grid_is_rejected() {
        let err = read_input(&inline("coal coal; stick")).unwrap_err();
        assert!(matches!(err, CliError::InvalidGrid { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_grid_file_is_a_user_error() {
        let args = CraftArgs {
            file: Some("/no/such/file.grid".into()),
            grid: None,
            all: false,
            catalog: CatalogArgs::default(),
        };
        assert_eq!(read_input(&args).unwrap_err().exit_code(), 2);
    }
}
