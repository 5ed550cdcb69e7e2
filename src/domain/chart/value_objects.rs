use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - what the y axis shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    #[display(fmt = "Price")]
    #[strum(serialize = "price")]
    Price,
    #[display(fmt = "% Change")]
    #[strum(serialize = "percentage")]
    Percentage,
}

impl ChartType {
    pub fn token(&self) -> &str {
        self.as_ref()
    }

    pub fn axis_name(&self) -> &'static str {
        match self {
            ChartType::Price => "Price",
            ChartType::Percentage => "Change (%)",
        }
    }
}

/// Value Object - RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0xFF_FFFF)
    }

    /// CSS notation, e.g. `#5470c6`
    pub fn css(&self) -> String {
        format!("#{:06x}", self.0)
    }
}

/// Series colors, assigned cyclically in series order
pub const PALETTE: [Color; 8] = [
    Color::from_hex(0x5470c6),
    Color::from_hex(0x91cc75),
    Color::from_hex(0xfac858),
    Color::from_hex(0xee6666),
    Color::from_hex(0x73c0de),
    Color::from_hex(0x3ba272),
    Color::from_hex(0xfc8452),
    Color::from_hex(0x9a60b4),
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_tokens() {
        assert_eq!("percentage".parse::<ChartType>().unwrap(), ChartType::Percentage);
        assert_eq!(ChartType::Price.token(), "price");
        assert_eq!(serde_json::to_string(&ChartType::Percentage).unwrap(), "\"percentage\"");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(palette_color(0), palette_color(8));
        assert_eq!(palette_color(3).css(), "#ee6666");
        assert_eq!(Color::from_hex(0x12).css(), "#000012");
    }
}
