//! Canvas 2D drawing surface (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::{ColorStop, DrawCommand, Paint, Shadow, Stroke};
use super::surface::{DrawingSurface, Viewport};

/// Draws commands onto an HTML canvas
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas; `None` if a 2D context is unavailable
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn gradient(&self, paint: &Paint) -> Option<CanvasGradient> {
        let (gradient, stops) = match paint {
            Paint::Solid(_) => return None,
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => (
                self.ctx
                    .create_radial_gradient(
                        center.x as f64,
                        center.y as f64,
                        *inner_radius as f64,
                        center.x as f64,
                        center.y as f64,
                        *outer_radius as f64,
                    )
                    .ok()?,
                stops,
            ),
            Paint::Linear { from, to, stops } => (
                self.ctx
                    .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64),
                stops,
            ),
        };
        for ColorStop { offset, color } in stops {
            gradient.add_color_stop(*offset, &color.to_css()).ok()?;
        }
        Some(gradient)
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            _ => match self.gradient(paint) {
                Some(gradient) => self.ctx.set_fill_style_canvas_gradient(&gradient),
                None => log::warn!("Failed to build gradient"),
            },
        }
    }

    fn set_shadow(&self, shadow: Option<&Shadow>) {
        match shadow {
            Some(shadow) => {
                self.ctx.set_shadow_blur(shadow.blur as f64);
                self.ctx.set_shadow_color(&shadow.color.to_css());
            }
            None => {
                self.ctx.set_shadow_blur(0.0);
                self.ctx.set_shadow_color("transparent");
            }
        }
    }

    fn set_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
    }

    fn paint(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::Wedge {
                center,
                radius,
                start,
                end,
                fill,
                overlay,
                stroke,
                shadow,
            } => {
                ctx.begin_path();
                ctx.move_to(center.x as f64, center.y as f64);
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    *start as f64,
                    *end as f64,
                )?;
                ctx.close_path();

                self.set_shadow(shadow.as_ref());
                self.set_fill(fill);
                ctx.fill();

                self.set_shadow(None);
                if let Some(overlay) = overlay {
                    self.set_fill(overlay);
                    ctx.fill();
                }
                if let Some(stroke) = stroke {
                    self.set_stroke(stroke);
                    ctx.stroke();
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                shadow,
            } => {
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                self.set_shadow(shadow.as_ref());
                self.set_fill(fill);
                ctx.fill();
            }
            DrawCommand::Square {
                center,
                size,
                rotation,
                color,
            } => {
                ctx.translate(center.x as f64, center.y as f64)?;
                ctx.rotate(*rotation as f64)?;
                self.set_shadow(None);
                ctx.set_fill_style_str(&color.to_css());
                let half = *size as f64 / 2.0;
                ctx.fill_rect(-half, -half, *size as f64, *size as f64);
            }
            DrawCommand::Text {
                text,
                origin,
                rotation,
                offset,
                align,
                font,
                color,
                shadow,
            } => {
                ctx.translate(origin.x as f64, origin.y as f64)?;
                ctx.rotate(*rotation as f64)?;
                ctx.set_text_align(align.as_str());
                ctx.set_text_baseline("middle");
                ctx.set_font(font);
                self.set_shadow(shadow.as_ref());
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_text(text, offset.x as f64, offset.y as f64)?;
            }
        }
        Ok(())
    }
}

impl DrawingSurface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        let (width, height) = viewport.device_size();
        // Resizing the backing store also resets the context state
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        if let Err(e) = self
            .ctx
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)
        {
            log::warn!("Failed to set canvas transform: {:?}", e);
        }
    }

    fn execute(&mut self, command: &DrawCommand) {
        self.ctx.save();
        if let Err(e) = self.paint(command) {
            log::warn!("Draw command failed: {:?}", e);
        }
        self.ctx.restore();
    }
}
