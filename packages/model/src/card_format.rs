use serde::{Deserialize, Serialize};

/// CSS reference pixels per millimetre (96dpi)
pub const DEFAULT_CANVAS_SCALE: f64 = 96.0 / 25.4;

/// Named physical card dimensions in millimetres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFormat {
    pub name: String,

    #[serde(rename = "width", alias = "widthMM")]
    pub width_mm: f64,

    #[serde(rename = "height", alias = "heightMM")]
    pub height_mm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl CardFormat {
    pub fn new(name: impl Into<String>, width_mm: f64, height_mm: f64) -> Self {
        Self {
            name: name.into(),
            width_mm,
            height_mm,
        }
    }

    pub fn a4_portrait() -> Self {
        Self::new("A4 Portrait", 210.0, 297.0)
    }

    pub fn a4_landscape() -> Self {
        Self::new("A4 Landscape", 297.0, 210.0)
    }

    pub fn a5_portrait() -> Self {
        Self::new("A5 Portrait", 148.0, 210.0)
    }

    pub fn a5_landscape() -> Self {
        Self::new("A5 Landscape", 210.0, 148.0)
    }

    pub fn a6_portrait() -> Self {
        Self::new("A6 Portrait", 105.0, 148.0)
    }

    pub fn a6_landscape() -> Self {
        Self::new("A6 Landscape", 148.0, 105.0)
    }

    /// Formats offered by the editor, in menu order
    pub fn presets() -> Vec<CardFormat> {
        vec![
            Self::a4_portrait(),
            Self::a4_landscape(),
            Self::a5_portrait(),
            Self::a5_landscape(),
            Self::a6_portrait(),
            Self::a6_landscape(),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn find_preset(name: &str) -> Option<CardFormat> {
        Self::presets()
            .into_iter()
            .find(|format| format.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn orientation(&self) -> Orientation {
        if self.width_mm > self.height_mm {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Canvas width in pixels for the given pixels-per-millimetre scale
    pub fn canvas_width(&self, scale: f64) -> f64 {
        self.width_mm * scale
    }

    /// Canvas height in pixels for the given pixels-per-millimetre scale
    pub fn canvas_height(&self, scale: f64) -> f64 {
        self.height_mm * scale
    }
}

impl Default for CardFormat {
    fn default() -> Self {
        Self::a5_landscape()
    }
}
