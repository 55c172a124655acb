//! Drawing commands
//!
//! The renderer describes a frame as a flat list of commands in CSS-pixel
//! coordinates. Surfaces replay them; nothing here touches a platform API.

use glam::Vec2;

use super::color::Rgba;

/// Color stop on a gradient (offset in 0..=1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Fill style
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Concentric radial gradient around `center`
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
    },
}

/// Outline applied after the fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

/// Blurred drop shadow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub blur: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    /// Pie wedge from `center`, angles in radians (clockwise on screen).
    /// `overlay` is painted over `fill` on the same path, without shadow.
    Wedge {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        fill: Paint,
        overlay: Option<Paint>,
        stroke: Option<Stroke>,
        shadow: Option<Shadow>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Paint,
        shadow: Option<Shadow>,
    },
    /// Square centered on `center`, rotated by `rotation` radians
    Square {
        center: Vec2,
        size: f32,
        rotation: f32,
        color: Rgba,
    },
    /// Text drawn in a frame translated to `origin` and rotated by
    /// `rotation`; `offset` is measured in that rotated frame
    Text {
        text: String,
        origin: Vec2,
        rotation: f32,
        offset: Vec2,
        align: TextAlign,
        font: &'static str,
        color: Rgba,
        shadow: Option<Shadow>,
    },
}

impl DrawCommand {
    pub fn is_wedge(&self) -> bool {
        matches!(self, DrawCommand::Wedge { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
