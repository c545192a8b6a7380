pub(crate) mod i18n;
pub(crate) mod icons;
pub(crate) mod style;
pub(crate) mod theme;
