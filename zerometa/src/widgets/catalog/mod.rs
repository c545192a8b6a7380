mod errors;
pub(crate) mod model;
mod storage;

pub(crate) use model::Layer;
use storage::CatalogLoadStatus;

/// Ordered, read-only list of layers available for browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LayerCatalog {
    layers: Vec<Layer>,
}

impl LayerCatalog {
    /// Create a catalog from layers in display order.
    pub(crate) fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Catalog made of the layers shipped with the application.
    pub(crate) fn builtin() -> Self {
        Self::new(model::builtin_layers())
    }

    /// Load the catalog from the user config directory. Any failure falls
    /// back to the built-in layers.
    pub(crate) fn load() -> Self {
        match storage::load_catalog() {
            Ok(load) => {
                let (catalog, status) = load.into_parts();
                match status {
                    CatalogLoadStatus::Loaded => log::info!(
                        "layer catalog loaded: {} layers",
                        catalog.len()
                    ),
                    CatalogLoadStatus::Missing => {
                        log::info!("no layer catalog file, using built-in layers")
                    },
                    CatalogLoadStatus::Invalid(message) => log::warn!(
                        "layer catalog invalid, using built-in layers: {message}"
                    ),
                }
                catalog
            },
            Err(err) => {
                log::warn!("layer catalog read failed: {err}");
                Self::builtin()
            },
        }
    }

    pub(crate) fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn len(&self) -> usize {
        self.layers.len()
    }

    /// Layers the catalog asks to start pinned, in catalog order.
    pub(crate) fn initially_pinned(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|layer| layer.pinned)
    }

    #[cfg(test)]
    pub(crate) fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }
}
