//! Theme
//!
//! Light/dark palette handed to consumers as a prop.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: &'static str,
    pub background: &'static str,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette { color: "black", background: "white" },
            Theme::Dark => Palette { color: "white", background: "black" },
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Palette {
    pub fn to_style(&self) -> String {
        format!("color: {}; background: {};", self.color, self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_palette_style() {
        assert_eq!(Theme::Dark.palette().to_style(), "color: white; background: black;");
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
