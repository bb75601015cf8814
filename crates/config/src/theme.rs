use std::fmt;

use crate::SitePath;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    pub name: ThemeName,
    pub default_mode: ColorMode,
    pub enable_mode_toggle: bool,
    pub position_mode: TogglePosition,
    /// Highlight fenced code blocks (pulls in highlight.js).
    pub code_highlight: bool,
    /// Stylesheets linked after the theme's own, in this order.
    pub custom_css: Vec<SitePath>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: ThemeName::default(),
            default_mode: ColorMode::default(),
            enable_mode_toggle: true,
            position_mode: TogglePosition::default(),
            code_highlight: true,
            custom_css: Default::default(),
        }
    }
}

/// Bundled themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Sky,
    Ruby,
    Retro,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sky => "sky",
            Self::Ruby => "ruby",
            Self::Retro => "retro",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Initial colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Where the light/dark toggle is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TogglePosition {
    #[default]
    Top,
    Bottom,
}
