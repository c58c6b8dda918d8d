use crate::ModelError;
use badgecraft_common::{TruncateMode, DEFAULT_MULTISELECT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Stable placeholder identity, unique within a layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What a placeholder displays and how its bound value is formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Date,
    Dropdown,
    Multiselect,
    Image,
    Qr,
    Barcode,
}

impl ElementType {
    pub const ALL: [ElementType; 7] = [
        ElementType::Text,
        ElementType::Date,
        ElementType::Dropdown,
        ElementType::Multiselect,
        ElementType::Image,
        ElementType::Qr,
        ElementType::Barcode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Date => "date",
            ElementType::Dropdown => "dropdown",
            ElementType::Multiselect => "multiselect",
            ElementType::Image => "image",
            ElementType::Qr => "qr",
            ElementType::Barcode => "barcode",
        }
    }

    /// Types whose box holds a picture rather than text
    pub fn is_graphic(&self) -> bool {
        matches!(self, ElementType::Image | ElementType::Qr | ElementType::Barcode)
    }

    /// Size of a freshly dropped placeholder
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ElementType::Image => (80.0, 80.0),
            _ => (150.0, 30.0),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownElementType(s.to_string()))
    }
}

/// Card face; each face is an independent layout printed on its own page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

impl FromStr for Side {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Side::Front),
            "back" => Ok(Side::Back),
            _ => Err(ModelError::UnknownSide(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A positioned, typed, data-bound box on one face of the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderElement {
    pub id: ElementId,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Field of the bound data record
    pub data_key: String,

    /// Shown when the record has no value for `data_key`
    #[serde(default)]
    pub label: String,

    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,

    #[serde(default)]
    pub side: Side,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate_mode: Option<TruncateMode>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_font_size: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_font_size: Option<f64>,

    /// Allowed values for dropdown/multiselect
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_select_separator: Option<String>,
}

impl PlaceholderElement {
    /// New placeholder with the type's default size and a 14px font
    pub fn new(
        id: impl Into<ElementId>,
        element_type: ElementType,
        data_key: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Self {
        let (width, height) = element_type.default_size();
        Self {
            id: id.into(),
            element_type,
            data_key: data_key.into(),
            label: format!("New {}", element_type),
            x,
            y,
            width,
            height,
            side: Side::Front,
            font_size: Some(DEFAULT_FONT_SIZE),
            font_family: None,
            font_weight: None,
            text_align: None,
            color: None,
            background_color: None,
            border_width: None,
            border_color: None,
            border_radius: None,
            max_length: None,
            truncate_mode: None,
            auto_font_size: false,
            min_font_size: None,
            max_font_size: None,
            options: Vec::new(),
            multi_select_separator: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_font_size(mut self, font_size: Option<f64>) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn separator(&self) -> &str {
        self.multi_select_separator
            .as_deref()
            .unwrap_or(DEFAULT_MULTISELECT_SEPARATOR)
    }

    pub fn truncate_mode(&self) -> TruncateMode {
        self.truncate_mode.unwrap_or_default()
    }
}
