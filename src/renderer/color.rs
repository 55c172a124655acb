//! Colors, palettes and channel shading

use serde::{Deserialize, Serialize};

/// 8-bit RGB color with float alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a 0xRRGGBB literal
    pub const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string (`#rrggbb` when opaque, `rgba(...)` otherwise)
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a.max(0.0))
        }
    }
}

/// Wheel slice colors, cycled by slice index
pub const WHEEL_PALETTE: [Rgba; 8] = [
    Rgba::hex(0xff0055), // Ruby
    Rgba::hex(0x00ddff), // Cyan
    Rgba::hex(0xaa00ff), // Amethyst
    Rgba::hex(0xffbb00), // Topaz
    Rgba::hex(0x00ff99), // Emerald
    Rgba::hex(0xff00cc), // Hot pink
    Rgba::hex(0x3366ff), // Royal blue
    Rgba::hex(0xff3300), // Garnet
];

/// Confetti colors
pub const CONFETTI_PALETTE: [Rgba; 5] = [
    Rgba::hex(0xf43f5e),
    Rgba::hex(0x8b5cf6),
    Rgba::hex(0x0ea5e9),
    Rgba::hex(0x10b981),
    Rgba::hex(0xf59e0b),
];

/// Palette color for a slice
#[inline]
pub fn slice_color(index: usize) -> Rgba {
    WHEEL_PALETTE[index % WHEEL_PALETTE.len()]
}

/// Scale each channel by `(100 + percent) / 100`, truncating and capping at 255
pub fn shade_color(color: Rgba, percent: i32) -> Rgba {
    let scale = |c: u8| -> u8 {
        let shaded = (c as i32 * (100 + percent)) / 100;
        shaded.clamp(0, 255) as u8
    };
    Rgba {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_css() {
        let c = Rgba::hex(0xff0055);
        assert_eq!((c.r, c.g, c.b), (255, 0, 85));
        assert_eq!(c.to_css(), "#ff0055");
        assert_eq!(Rgba::WHITE.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn test_shade_darkens_by_truncation() {
        // 255 * 70 / 100 = 178.5 -> 178, 85 * 0.7 = 59.5 -> 59
        assert_eq!(shade_color(Rgba::hex(0xff0055), -30), Rgba::hex(0xb2003b));
        assert_eq!(shade_color(Rgba::hex(0x00ddff), -30).to_css(), "#009ab2");
    }

    #[test]
    fn test_shade_lightens_with_cap() {
        assert_eq!(shade_color(Rgba::hex(0xc86432), 50), Rgba::hex(0xff964b));
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(slice_color(0), slice_color(8));
        assert_eq!(slice_color(3), slice_color(11));
        assert_ne!(slice_color(0), slice_color(1));
    }
}
