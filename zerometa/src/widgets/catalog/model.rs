use serde::{Deserialize, Serialize};

/// A browsable map layer.
///
/// Identity is the `id`. The `pinned` flag only records whether the layer
/// should start pinned; live pin membership is owned by the navigation
/// widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Layer {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) icon: String,
    #[serde(default)]
    pub(crate) pinned: bool,
}

impl Layer {
    /// Create an unpinned layer.
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            pinned: false,
        }
    }
}

/// Layers shipped with the application, used when no catalog file exists.
pub(crate) fn builtin_layers() -> Vec<Layer> {
    vec![
        Layer::new("satellite", "Satellite", "satellite"),
        Layer::new("terrain", "Terrain", "mountain"),
        Layer::new("traffic", "Traffic", "car"),
        Layer::new("weather", "Weather", "cloud-sun-rain"),
        Layer::new("borders", "Borders", "border-all"),
        Layer::new("places", "Places", "map-marker-alt"),
    ]
}
