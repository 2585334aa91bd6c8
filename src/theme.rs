use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported color `{0}`; expected #RGB, #RRGGBB or a named grey")]
pub struct ColorError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError(input.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "lightgrey" | "lightgray" => Ok(Self::rgb(0xD3, 0xD3, 0xD3)),
            "grey" | "gray" => Ok(Self::rgb(0x80, 0x80, 0x80)),
            _ => Err(ColorError(input.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Components scaled to `0.0..=1.0`, as PDF color operators expect.
    pub fn unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |s: &str| channel(s).map(|v| v * 17);
            Some(Color::rgb(
                short(&hex[0..1])?,
                short(&hex[1..2])?,
                short(&hex[2..3])?,
            ))
        }
        _ => None,
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Cosmetic settings shared by every figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub node_color: Color,
    /// Marker area in square points.
    pub node_size: f32,
    pub edge_color: Color,
    /// Edge color of the random graph and of every panel in the combined figure.
    pub light_edge_color: Color,
    pub edge_width: f32,
    pub with_labels: bool,
    pub font_family: String,
    pub title_font_size: f32,
    pub label_font_size: f32,
    pub text_color: Color,
    pub background: Color,
}

impl Theme {
    pub fn workshop() -> Self {
        Self {
            node_color: Color::rgb(0xA0, 0xCB, 0xE2),
            node_size: 75.0,
            edge_color: Color::BLACK,
            light_edge_color: Color::rgb(0xD3, 0xD3, 0xD3),
            edge_width: 1.0,
            with_labels: false,
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            title_font_size: 12.0,
            label_font_size: 6.0,
            text_color: Color::BLACK,
            background: Color::WHITE,
        }
    }

    /// Radius in points of a node marker with area `node_size`.
    pub fn node_radius(&self) -> f32 {
        self.node_size.max(0.0).sqrt() / 2.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::workshop()
    }
}
