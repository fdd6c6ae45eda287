//! `craftgrid show`: print every layout of one recipe.

use craftgrid_core::application::{CatalogService, RecipeInfo};

use crate::{
    cli::{OutputFormat, ShowArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ShowArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let size = super::table_size(&args.catalog, config);
    let store = super::load_store(&args.catalog, config)?;
    let variants = CatalogService::new(Box::new(store)).show(&args.group, size)?;

    if output.format() == OutputFormat::Json {
        output.json(&variants)?;
        return Ok(());
    }

    for (index, info) in variants.iter().enumerate() {
        if index > 0 {
            output.data("")?;
        }
        output.header(&heading(info))?;
        output.grid(&info.layout)?;
        if !info.fits {
            output.warning(&format!("Does not fit a {size}x{size} table"))?;
        }
    }
    Ok(())
}

fn heading(info: &RecipeInfo) -> String {
    let kind = if info.shapeless {
        "shapeless"
    } else {
        "shaped"
    };
    format!("{}#{}  {} ({kind})", info.group, info.id, info.name)
}
