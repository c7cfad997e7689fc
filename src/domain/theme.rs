//! Theme identity for the preference model.
//!
//! The UI supports a closed set of named themes. The active theme is the only
//! user preference the core tracks today; it is persisted under a fixed storage
//! key and applied as a document-level attribute by the excluded view layer.
//!
//! Unknown theme names are never an error. Every entry point that accepts a raw
//! name (actions, persisted storage values) normalizes unrecognized input to the
//! default theme, so a stale or corrupt persisted value can never poison state.

use serde::{Deserialize, Serialize};

/// Identifier of a theme in the closed theme set.
///
/// The serialized form matches the stylesheet asset names used by the view
/// layer (`"theme"` for the default light theme, `"darkTheme"` for dark mode),
/// so the value written to storage is directly usable as a `data-theme`
/// document attribute.
///
/// # Examples
///
/// ```
/// use hubstate::domain::ThemeName;
///
/// assert_eq!(ThemeName::Dark.as_str(), "darkTheme");
/// assert_eq!(ThemeName::parse("darkTheme"), Some(ThemeName::Dark));
/// assert_eq!(ThemeName::parse("neon"), None);
/// assert_eq!(ThemeName::parse_or_default("neon"), ThemeName::Default);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeName {
    /// The default light theme, serialized as `"theme"`.
    #[default]
    #[serde(rename = "theme")]
    Default,

    /// The dark theme, serialized as `"darkTheme"`.
    #[serde(rename = "darkTheme")]
    Dark,
}

impl ThemeName {
    /// Parses a raw theme name, returning `None` for names outside the closed set.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "theme" => Some(Self::Default),
            "darkTheme" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Parses a raw theme name, substituting the default theme for unknown names.
    ///
    /// This is the recovery point for invalid theme names: callers get a valid
    /// theme back no matter what the input was. The substitution is logged at
    /// debug level since it is an expected condition, not a failure.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme name, substituting default");
            Self::default()
        })
    }

    /// Returns the serialized name of this theme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "theme",
            Self::Dark => "darkTheme",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_names() {
        for theme in [ThemeName::Default, ThemeName::Dark] {
            assert_eq!(ThemeName::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        assert_eq!(ThemeName::parse_or_default("neon"), ThemeName::Default);
        assert_eq!(ThemeName::parse_or_default(""), ThemeName::Default);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&ThemeName::Dark).unwrap();
        assert_eq!(json, "\"darkTheme\"");
        let back: ThemeName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThemeName::Dark);
    }
}
