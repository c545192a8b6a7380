//! Glyph icons rendered as text.

pub(crate) const HOME: &str = "⌂";
pub(crate) const LAYERS: &str = "☰";
pub(crate) const SETTINGS: &str = "⚙";
pub(crate) const SUPPORT: &str = "♥";
pub(crate) const PIN: &str = "⊕";
pub(crate) const UNPIN: &str = "⊖";
pub(crate) const CLOSE: &str = "✕";
pub(crate) const LOGO: &str = "ZM";

const FALLBACK_LAYER: &str = "●";

/// Glyph for a catalog icon name. Unknown names get a neutral dot.
pub(crate) fn layer_glyph(icon: &str) -> &'static str {
    match icon {
        "satellite" => "◉",
        "mountain" => "▲",
        "car" => "■",
        "cloud-sun-rain" | "cloud" => "☁",
        "border-all" => "▦",
        "map-marker-alt" => "◆",
        _ => FALLBACK_LAYER,
    }
}
