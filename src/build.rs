//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_site() ──► Manifest ──► units + DataProviderManager
//!     │
//!     ├── export_units()   (rayon, one task per source)
//!     │       ├── opted in ──► PaginationGenerator ──► UnitData::from_pages
//!     │       └── otherwise ──► UnitData::from_unit
//!     │
//!     └── write_export() ──► <output>/pages.json or stdout
//! ```

use crate::{
    config::SiteConfig,
    content::ContentUnit,
    data::{Manifest, UnitData},
    log,
    paginate::PaginationGenerator,
    permalink::SourcePermalinkFactory,
    provider::DataProviderManager,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;
use std::fs;

/// Metadata key a source uses to opt into a generator.
const GENERATOR_KEY: &str = "generator";

/// Loaded manifest, ready to paginate.
pub struct Site {
    pub units: Vec<ContentUnit>,
    pub providers: DataProviderManager,
}

/// Build every source and write the export.
pub fn build_site(config: &SiteConfig, to_stdout: bool) -> Result<Vec<UnitData>> {
    let site = load_site(config)?;
    let exported = export_units(config, &site)?;
    write_export(config, &exported, to_stdout)?;
    Ok(exported)
}

/// Validate the manifest and paginate every source without writing anything.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let site = load_site(config)?;
    let exported = export_units(config, &site)?;
    let pages = exported.iter().filter(|unit| unit.pagination.is_some()).count();
    log!("check"; "ok: {} units, {} generated pages", exported.len(), pages);
    Ok(())
}

/// Load the manifest named by `[build.manifest]`.
pub fn load_site(config: &SiteConfig) -> Result<Site> {
    let manifest = Manifest::from_path(&config.build.manifest)?;
    let site = Site {
        units: manifest.units(),
        providers: manifest.providers(),
    };
    log!(
        "manifest";
        "{} sources, {} providers",
        site.units.len(),
        site.providers.len()
    );
    Ok(site)
}

/// Export every unit of `site`, paginating the opted-in ones in parallel.
///
/// Output keeps manifest order; generated pages replace their source.
pub fn export_units(config: &SiteConfig, site: &Site) -> Result<Vec<UnitData>> {
    let permalinks = SourcePermalinkFactory::new(config.permalink.pattern.clone());
    let generator =
        PaginationGenerator::new(&site.providers, &permalinks, config.pagination.max_per_page)
            .with_default_provider(&config.pagination.provider);
    let marker = config.pagination.generator.as_str();

    let exported = site
        .units
        .par_iter()
        .map(|unit| -> Result<Vec<UnitData>> {
            if !wants_generator(unit, marker) {
                return Ok(vec![UnitData::from_unit(unit, &permalinks)]);
            }

            let pages = generator
                .generate(unit)
                .with_context(|| format!("Failed to paginate `{}`", unit.source_id()))?;
            if pages.is_empty() {
                log!("warn"; "{}: no pages generated", unit.source_id());
            } else {
                log!("pagination"; "{}: {} pages", unit.source_id(), pages.len());
            }
            Ok(UnitData::from_pages(&pages, &permalinks))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(exported.into_iter().flatten().collect())
}

/// Serialize `units` to `[build.output]/[build.export]`, or to stdout.
pub fn write_export(config: &SiteConfig, units: &[UnitData], to_stdout: bool) -> Result<()> {
    let json = serde_json::to_string_pretty(units)?;

    if to_stdout {
        println!("{json}");
        return Ok(());
    }

    let path = config.export_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory `{}`", parent.display()))?;
    }
    fs::write(&path, json).with_context(|| format!("Failed to write `{}`", path.display()))?;
    log!("build"; "wrote {} units to {}", units.len(), path.display());
    Ok(())
}

/// Whether `unit` names `marker` in its `generator` metadata, either as the
/// value itself or as one entry of a list.
fn wants_generator(unit: &ContentUnit, marker: &str) -> bool {
    match unit.data().get(GENERATOR_KEY) {
        Some(Value::String(name)) => name == marker,
        Some(Value::Array(names)) => names.iter().any(|name| name.as_str() == Some(marker)),
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
