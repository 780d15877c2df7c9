//! sfx-gen library
//!
//! Generates a compact JS sound-effect module from a JSON catalog of ZzFX
//! parameter vectors. One exported function per sound forwards to a shared
//! `zzfx` call with the shortest possible argument list:
//!
//! - values identical across every sound become module constants,
//! - values unique to one sound get no declared default,
//! - the remaining mixed columns get per-column defaults and an order chosen
//!   so the total number of omittable trailing arguments is maximized.
//!
//! The pipeline runs strictly forward: normalize -> infer defaults ->
//! classify -> optimize order -> emit.

pub mod analyze;
pub mod catalog;
pub mod generators;
pub mod model;
pub mod order;
pub mod schema;

use anyhow::{Context, Result};
use std::path::Path;

/// Generate the module text for a catalog given as JSON
pub fn generate_module(catalog_json: &str) -> Result<String> {
    let catalog = catalog::parse_catalog(catalog_json)?;
    let stats = analyze::infer_defaults(&catalog);
    let classes = analyze::classify(&stats, catalog.len());
    let plan = order::optimal_order(&catalog, &classes.mixed, &stats);
    generators::js::render_module(&catalog, &stats, &classes, &plan)
}

/// Generate from an input file to an output file, or to stdout when no
/// output path is given. Progress is reported only in the file case so the
/// stdout stream stays byte-clean.
pub fn generate_to(input: &Path, output: Option<&Path>) -> Result<()> {
    let catalog = catalog::load_catalog(input)?;
    let stats = analyze::infer_defaults(&catalog);
    let classes = analyze::classify(&stats, catalog.len());
    let plan = order::optimal_order(&catalog, &classes.mixed, &stats);
    let module = generators::js::render_module(&catalog, &stats, &classes, &plan)?;

    match output {
        Some(path) => {
            std::fs::write(path, &module)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Parsed {} sounds", catalog.len());
            println!(
                "Constants: {}, parameters: {}",
                classes.constant.len(),
                classes.parameter_count()
            );
            println!("Omitted {} trailing arguments across all calls", plan.savings);
            println!("Generated module: {}", path.display());
        }
        None => print!("{}", module),
    }

    Ok(())
}
