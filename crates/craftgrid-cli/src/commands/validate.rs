//! `craftgrid validate`: report malformed or oversized recipes.

use craftgrid_core::application::CatalogService;

use crate::{
    cli::{OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ValidateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let size = super::table_size(&args.catalog, config);
    let source = super::catalog_source(&args.catalog, config);
    let report = CatalogService::validate(source.as_ref(), size)?;
    let issues = &report.issues;

    if output.format() == OutputFormat::Json {
        output.json(issues)?;
    } else if report.is_valid() {
        output.success(&format!(
            "Catalog is valid: {} recipe variants fit a {size}x{size} table",
            report.variants
        ))?;
    } else {
        for issue in issues {
            output.error(&issue.message)?;
            for hint in &issue.suggestions {
                output.print(&format!("    {hint}"))?;
            }
        }
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::CatalogInvalid {
            count: issues.len(),
        })
    }
}
