//! Implementation of the `craftgrid list` command.

use craftgrid_core::application::{CatalogService, RecipeInfo};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let size = super::table_size(&args.catalog, config);
    let store = super::load_store(&args.catalog, config)?;
    let service = CatalogService::new(Box::new(store));

    let recipes = match &args.search {
        Some(query) => service.search(query, size)?,
        None => service.list(size, args.all)?,
    };

    match args.format {
        ListFormat::Table => {
            if recipes.is_empty() {
                output.info("No recipes found")?;
                return Ok(());
            }
            output.header(&format!("Recipes for a {size}x{size} table:"))?;
            let width = recipes.iter().map(label_len).max().unwrap_or(0);
            for info in &recipes {
                output.data(&table_row(info, width))?;
            }
        }

        // JSON must stay parseable in pipes, so it ignores --output-format.
        ListFormat::Json => output.json(&recipes)?,

        ListFormat::List => {
            for info in &recipes {
                output.data(&format!("{}#{}", info.group, info.id))?;
            }
        }

        ListFormat::Csv => {
            output.data("group,id,name,kind,rows,cols,fits")?;
            for info in &recipes {
                output.data(&format!(
                    "{},{},{},{},{},{},{}",
                    info.group,
                    info.id,
                    csv_field(&info.name),
                    kind(info),
                    info.rows,
                    info.cols,
                    info.fits
                ))?;
            }
        }
    }

    Ok(())
}

fn kind(info: &RecipeInfo) -> &'static str {
    if info.shapeless { "shapeless" } else { "shaped" }
}

fn label_len(info: &RecipeInfo) -> usize {
    info.group.chars().count() + info.id.chars().count() + 1
}

fn table_row(info: &RecipeInfo, width: usize) -> String {
    let label = format!("{}#{}", info.group, info.id);
    let mut row = format!(
        "  {label:<width$}  {:<9}  {}x{}  {}",
        kind(info),
        info.rows,
        info.cols,
        info.name
    );
    if !info.fits {
        row.push_str("  (too large)");
    }
    row
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
