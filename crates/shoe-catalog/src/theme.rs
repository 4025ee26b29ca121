//! Design-system constants: named colors and the type-weight scale.

use serde::{Deserialize, Serialize};

/// Named colors used by catalog views.
///
/// Values are CSS color strings so they can be dropped straight into
/// style declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub white: String,
    pub gray_100: String,
    pub gray_300: String,
    pub gray_500: String,
    pub gray_700: String,
    pub gray_900: String,
    /// Accent for sale decorations.
    pub primary: String,
    /// Accent for new-release decorations.
    pub secondary: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "hsl(0deg 0% 100%)".to_string(),
            gray_100: "hsl(185deg 5% 95%)".to_string(),
            gray_300: "hsl(190deg 5% 80%)".to_string(),
            gray_500: "hsl(196deg 4% 60%)".to_string(),
            gray_700: "hsl(220deg 5% 40%)".to_string(),
            gray_900: "hsl(220deg 3% 20%)".to_string(),
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
        }
    }
}

/// Font weight scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}
