use std::fmt;

/// Colour as understood by 2D canvas contexts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// 8-bit RGB with float alpha (0.0 - 1.0).
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent, float alpha.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    /// Opaque colour from a 0xRRGGBB literal.
    pub const fn hex(rgb: u32) -> Self {
        Color::Rgba {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn white(a: f32) -> Self {
        Color::rgba(255, 255, 255, a)
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    /// CSS colour string, e.g. `hsla(240, 70%, 60%, 0.1)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_splits_channels() {
        assert_eq!(Color::hex(0x020417), Color::rgba(2, 4, 23, 1.0));
    }

    #[test]
    fn css_strings() {
        assert_eq!(Color::white(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Color::hsla(240.0, 70.0, 60.0, 0.25).to_css(), "hsla(240, 70%, 60%, 0.25)");
        assert_eq!(Color::TRANSPARENT.alpha(), 0.0);
    }
}
