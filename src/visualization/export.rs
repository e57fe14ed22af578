use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::activations::ActivationParams;
use crate::error::Result;
use crate::registry::ActivationRegistry;
use crate::sampling::SampledSeries;

/// Export sampled series to CSV format
pub fn export_series_csv<P: AsRef<Path>>(series: &[SampledSeries], path: P) -> Result<()> {
    let mut file = std::fs::File::create(path)?;

    // Write header
    writeln!(file, "name,kind,x,y")?;

    for s in series {
        for point in &s.points {
            writeln!(file, "{},{},{},{}", s.name, s.kind, point.x, point.y)?;
        }
    }

    Ok(())
}

/// Export sampled series to pretty-printed JSON
pub fn export_series_json<P: AsRef<Path>>(series: &[SampledSeries], path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, series)?;
    Ok(())
}

/// One registry entry as written by [`export_catalog_json`]
#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    name: &'a str,
    description: &'a str,
    params: ActivationParams,
}

/// Export name, description and parameters of every registry entry
pub fn export_catalog_json<P: AsRef<Path>>(registry: &ActivationRegistry, path: P) -> Result<()> {
    let entries: Vec<CatalogEntry> = registry
        .iter()
        .map(|function| CatalogEntry {
            name: function.name(),
            description: function.description(),
            params: *function.params(),
        })
        .collect();

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &entries)?;
    Ok(())
}
