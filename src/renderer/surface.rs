//! Drawing surfaces
//!
//! A surface replays `DrawCommand`s. The browser canvas implementation lives
//! in `canvas.rs`; `RecordingSurface` keeps the commands for inspection.

use glam::Vec2;

use super::commands::DrawCommand;

/// Visible area in CSS pixels plus the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            dpr: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Backing store size in device pixels
    pub fn device_size(&self) -> (u32, u32) {
        (
            (self.width as f64 * self.dpr) as u32,
            (self.height as f64 * self.dpr) as u32,
        )
    }
}

/// Anything that can execute draw commands
pub trait DrawingSurface {
    /// Resize the backing store and reset the CSS-to-device scale.
    ///
    /// The scale is set absolutely, never multiplied onto the current one.
    fn resize(&mut self, viewport: Viewport);

    fn execute(&mut self, command: &DrawCommand);

    fn draw(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.execute(command);
        }
    }
}

/// Surface that stores the last frame's commands
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
    pub resizes: u32,
}

impl RecordingSurface {
    pub fn wedge_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_wedge()).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.resizes += 1;
    }

    fn execute(&mut self, command: &DrawCommand) {
        // A clear starts a new frame
        if matches!(command, DrawCommand::Clear { .. }) {
            self.commands.clear();
        }
        self.commands.push(command.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_size_scales_by_dpr() {
        let vp = Viewport::new(400.0, 300.0, 2.0);
        assert_eq!(vp.device_size(), (800, 600));
    }

    #[test]
    fn test_invalid_dpr_defaults_to_one() {
        let vp = Viewport::new(100.0, 50.0, 0.0);
        assert_eq!(vp.dpr, 1.0);
        assert_eq!(vp.device_size(), (100, 50));
    }

    #[test]
    fn test_recording_surface_keeps_one_frame() {
        let mut surface = RecordingSurface::default();
        let clear = DrawCommand::Clear {
            width: 1.0,
            height: 1.0,
        };
        surface.draw(&[clear.clone(), clear.clone()]);
        surface.draw(&[clear]);
        assert_eq!(surface.commands.len(), 1);
    }
}
