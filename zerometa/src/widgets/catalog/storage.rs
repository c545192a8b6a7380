use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::LayerCatalog;
use super::errors::CatalogError;
use super::model::Layer;

/// Status describing how the catalog was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the catalog from disk.
#[derive(Debug, Clone)]
pub(crate) struct CatalogLoad {
    catalog: LayerCatalog,
    status: CatalogLoadStatus,
}

impl CatalogLoad {
    /// Build a catalog load result from explicit parts.
    pub(crate) fn new(catalog: LayerCatalog, status: CatalogLoadStatus) -> Self {
        Self { catalog, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (LayerCatalog, CatalogLoadStatus) {
        (self.catalog, self.status)
    }
}

/// Read the catalog file, falling back to built-in layers when it is
/// missing or malformed.
pub(crate) fn load_catalog() -> Result<CatalogLoad, CatalogError> {
    load_catalog_from_path(&catalog_path())
}

fn load_catalog_from_path(path: &Path) -> Result<CatalogLoad, CatalogError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CatalogLoad::new(
                LayerCatalog::builtin(),
                CatalogLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match parse_layers(&data) {
        Ok(layers) => Ok(CatalogLoad::new(
            LayerCatalog::new(layers),
            CatalogLoadStatus::Loaded,
        )),
        Err(err) => Ok(CatalogLoad::new(
            LayerCatalog::builtin(),
            CatalogLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

/// Parse and validate a JSON array of layers.
fn parse_layers(data: &str) -> Result<Vec<Layer>, CatalogError> {
    let layers: Vec<Layer> = serde_json::from_str(data)?;
    validate_layers(&layers)?;
    Ok(layers)
}

fn validate_layers(layers: &[Layer]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, layer) in layers.iter().enumerate() {
        if layer.id.trim().is_empty() {
            return Err(CatalogError::Validation {
                message: format!("layer at index {index} has an empty id"),
            });
        }
        if !seen.insert(layer.id.as_str()) {
            return Err(CatalogError::Validation {
                message: format!("duplicate layer id '{}'", layer.id),
            });
        }
    }

    Ok(())
}

fn catalog_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("zerometa")
            .join("layers.json");
    }

    std::env::temp_dir().join("zerometa").join("layers.json")
}
