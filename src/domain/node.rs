use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_INITIAL_WIDTH: u32 = 40;
pub const DEFAULT_HEIGHT: u32 = 20;

const CHAR_WIDTH: u32 = 7;
const TEXT_PADDING: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rect,
    RoundRect,
    Ellipse,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Rect => "Rect",
            Shape::RoundRect => "RoundRect",
            Shape::Ellipse => "Ellipse",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Deterministic fill color for a node, derived from its display text so the
/// same entity gets the same color in every view.
pub fn string_specific_color(text: &str) -> Color {
    let mut hash: u32 = 0;
    for byte in text.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u32);
    }

    // Channels kept in the upper half so node labels stay readable.
    Color {
        r: 128 + ((hash >> 16) % 128) as u8,
        g: 128 + ((hash >> 8) % 128) as u8,
        b: 128 + (hash % 128) as u8,
    }
}

/// A pathway element as it appears on the canvas: a shaped, colored box with
/// a tooltip and an inspectable property list.
#[derive(Debug, Clone)]
pub struct SifNode {
    rdf_id: String,
    text: String,
    shape: Shape,
    tooltip: String,
    color: Color,
    width: u32,
    height: u32,
}

impl SifNode {
    pub fn new(rdf_id: impl Into<String>, name: Option<String>) -> Self {
        let rdf_id = rdf_id.into();
        let text = name.unwrap_or_else(|| rdf_id.clone());

        let mut node = Self {
            rdf_id,
            tooltip: String::new(),
            color: Color { r: 0, g: 0, b: 0 },
            shape: Shape::RoundRect,
            width: 0,
            height: DEFAULT_HEIGHT,
            text,
        };
        node.config_from_model();
        node.width = node.suggest_initial_width().max(MIN_INITIAL_WIDTH);
        node
    }

    /// Refresh the presentation attributes that follow from the model text.
    pub fn config_from_model(&mut self) {
        self.tooltip = self.text.clone();
        self.color = string_specific_color(&self.text);
    }

    fn suggest_initial_width(&self) -> u32 {
        self.text.chars().count() as u32 * CHAR_WIDTH + TEXT_PADDING
    }

    pub fn rdf_id(&self) -> &str {
        &self.rdf_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Property rows shown in the object inspector, ID last.
    pub fn inspectable(&self) -> Vec<(String, String)> {
        vec![
            ("Name".to_string(), self.text.clone()),
            ("Shape".to_string(), self.shape.to_string()),
            ("ID".to_string(), self.rdf_id.clone()),
        ]
    }
}
