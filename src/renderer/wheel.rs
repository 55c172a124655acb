//! Wheel frame generation
//!
//! Pure functions from (choices, rotation, effects, layout) to draw commands.

use glam::Vec2;

use super::color::{Rgba, shade_color, slice_color};
use super::commands::{ColorStop, DrawCommand, Paint, Shadow, Stroke, TextAlign};
use super::surface::Viewport;
use crate::consts::*;
use crate::effects::particles::{ConfettiBurst, EffectLayer};
use crate::normalize_angle;
use crate::sim::{ChoiceSet, bounds_of, display_label, mid_angle_of};

pub const LABEL_FONT: &str = "bold 20px Outfit, sans-serif";
pub const HUB_GLYPH: &str = "★";
pub const HUB_FONT: &str = "24px Arial";

const HUB_RING_COLORS: [Rgba; 2] = [Rgba::hex(0x334155), Rgba::hex(0x0f172a)];
const HUB_BUTTON_COLORS: [Rgba; 2] = [Rgba::hex(0xa78bfa), Rgba::hex(0x7c3aed)];

/// Where the wheel sits in the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub size: Vec2,
    pub center: Vec2,
    pub radius: f32,
    /// Tip of the fixed pointer, where friction sparks appear
    pub pointer_tip: Vec2,
}

impl WheelLayout {
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let size = viewport.size();
        let center = size / 2.0;
        Self {
            size,
            center,
            radius: (size.min_element() / 2.0 - WHEEL_MARGIN).max(0.0),
            pointer_tip: Vec2::new(size.x - POINTER_TIP_INSET, center.y),
        }
    }
}

/// Draw the wheel at `angle` with the current spark particles
pub fn render_wheel(
    choices: &ChoiceSet,
    angle: f64,
    layout: &WheelLayout,
    effects: &EffectLayer,
    label_max_chars: usize,
) -> Vec<DrawCommand> {
    let count = choices.len();
    let mut commands = Vec::with_capacity(count * 2 + 8 + effects.sparks.len());

    commands.push(DrawCommand::Clear {
        width: layout.size.x,
        height: layout.size.y,
    });

    // Large accumulated angles lose precision in f32; reduce first
    let rotation = normalize_angle(angle) as f32;

    for (index, label) in choices.iter().enumerate() {
        let (start, end) = bounds_of(index, count);
        commands.push(wedge(layout, rotation, start as f32, end as f32, slice_color(index)));

        commands.push(DrawCommand::Text {
            text: display_label(label, label_max_chars).to_string(),
            origin: layout.center,
            rotation: rotation + mid_angle_of(index, count) as f32,
            offset: Vec2::new(layout.radius - LABEL_INSET, 0.0),
            align: TextAlign::Right,
            font: LABEL_FONT,
            color: Rgba::WHITE,
            shadow: Some(Shadow {
                blur: 4.0,
                color: Rgba::BLACK.with_alpha(0.8),
            }),
        });
    }

    hub(layout, &mut commands);

    for spark in &effects.sparks {
        commands.push(DrawCommand::Circle {
            center: spark.pos,
            radius: spark.size,
            fill: Paint::Solid(spark.color.with_alpha(spark.life)),
            shadow: None,
        });
    }

    commands
}

/// One faceted slice: jewel gradient, gloss sheen and a thin rim
fn wedge(layout: &WheelLayout, rotation: f32, start: f32, end: f32, base: Rgba) -> DrawCommand {
    let center = layout.center;
    let radius = layout.radius;

    // Gloss runs top to bottom in the wheel's own frame
    let turn = Vec2::from_angle(rotation);
    let gloss_from = center + turn.rotate(Vec2::new(0.0, -radius));
    let gloss_to = center + turn.rotate(Vec2::new(0.0, radius));

    DrawCommand::Wedge {
        center,
        radius,
        start: rotation + start,
        end: rotation + end,
        fill: Paint::Radial {
            center,
            inner_radius: 0.0,
            outer_radius: radius,
            stops: vec![
                ColorStop::new(0.0, base),
                ColorStop::new(0.5, base),
                ColorStop::new(1.0, shade_color(base, -30)),
            ],
        },
        overlay: Some(Paint::Linear {
            from: gloss_from,
            to: gloss_to,
            stops: vec![
                ColorStop::new(0.0, Rgba::WHITE.with_alpha(0.5)),
                ColorStop::new(0.5, Rgba::WHITE.with_alpha(0.0)),
                ColorStop::new(1.0, Rgba::WHITE.with_alpha(0.2)),
            ],
        }),
        stroke: Some(Stroke {
            color: Rgba::WHITE.with_alpha(0.6),
            width: 1.0,
        }),
        shadow: Some(Shadow {
            blur: 15.0,
            color: Rgba::BLACK.with_alpha(0.3),
        }),
    }
}

fn diagonal_gradient(center: Vec2, radius: f32, colors: [Rgba; 2]) -> Paint {
    Paint::Linear {
        from: center - Vec2::splat(radius),
        to: center + Vec2::splat(radius),
        stops: vec![ColorStop::new(0.0, colors[0]), ColorStop::new(1.0, colors[1])],
    }
}

/// Fixed center cap: slate ring, violet button, shine and star
fn hub(layout: &WheelLayout, commands: &mut Vec<DrawCommand>) {
    let center = layout.center;

    commands.push(DrawCommand::Circle {
        center,
        radius: HUB_OUTER_RADIUS,
        fill: diagonal_gradient(center, HUB_OUTER_RADIUS, HUB_RING_COLORS),
        shadow: Some(Shadow {
            blur: 10.0,
            color: Rgba::BLACK.with_alpha(0.5),
        }),
    });
    commands.push(DrawCommand::Circle {
        center,
        radius: HUB_INNER_RADIUS,
        fill: diagonal_gradient(center, HUB_INNER_RADIUS, HUB_BUTTON_COLORS),
        shadow: None,
    });
    commands.push(DrawCommand::Circle {
        center: center - Vec2::new(0.0, 10.0),
        radius: 15.0,
        fill: Paint::Solid(Rgba::WHITE.with_alpha(0.2)),
        shadow: None,
    });
    commands.push(DrawCommand::Text {
        text: HUB_GLYPH.to_string(),
        origin: center,
        rotation: 0.0,
        offset: Vec2::new(0.0, 2.0),
        align: TextAlign::Center,
        font: HUB_FONT,
        color: Rgba::WHITE,
        shadow: None,
    });
}

/// Draw a confetti shower as rotated squares
pub fn render_confetti(burst: &ConfettiBurst, size: Vec2) -> Vec<DrawCommand> {
    std::iter::once(DrawCommand::Clear {
        width: size.x,
        height: size.y,
    })
    .chain(burst.pieces.iter().filter(|p| p.pos.y < size.y).map(|p| DrawCommand::Square {
        center: p.pos,
        size: p.size,
        rotation: p.angle,
        color: p.color,
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::particles::spark_burst;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::TAU;

    fn layout() -> WheelLayout {
        WheelLayout::from_viewport(&Viewport::new(600.0, 400.0, 2.0))
    }

    fn wedges(commands: &[DrawCommand]) -> Vec<(f32, f32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Wedge { start, end, .. } => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layout_from_viewport() {
        let l = layout();
        assert_eq!(l.center, Vec2::new(300.0, 200.0));
        assert_eq!(l.radius, 180.0);
        assert_eq!(l.pointer_tip, Vec2::new(575.0, 200.0));
    }

    #[test]
    fn test_one_wedge_and_label_per_choice() {
        let choices = ChoiceSet::parse("A\nB\nC\nD\nE");
        let commands = render_wheel(&choices, 0.0, &layout(), &EffectLayer::default(), 20);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert_eq!(wedges(&commands).len(), 5);

        let texts: Vec<&str> = commands.iter().filter_map(DrawCommand::text).collect();
        assert_eq!(texts, vec!["A", "B", "C", "D", "E", HUB_GLYPH]);
    }

    #[test]
    fn test_single_choice_is_full_circle() {
        let choices = ChoiceSet::parse("Only");
        let commands = render_wheel(&choices, 0.0, &layout(), &EffectLayer::default(), 20);
        let w = wedges(&commands);
        assert_eq!(w.len(), 1);
        let (start, end) = w[0];
        assert!(((end - start) - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_wedges_follow_rotation() {
        let choices = ChoiceSet::parse("A\nB\nC\nD");
        let commands = render_wheel(&choices, 1.0 + 10.0 * std::f64::consts::TAU, &layout(), &EffectLayer::default(), 20);
        let (start, _) = wedges(&commands)[0];
        assert!((start - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_palette_cycles_past_eight() {
        let raw: Vec<String> = (0..10).map(|i| format!("choice {i}")).collect();
        let choices = ChoiceSet::parse(&raw.join("\n"));
        let commands = render_wheel(&choices, 0.0, &layout(), &EffectLayer::default(), 20);
        let base_colors: Vec<Rgba> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Wedge {
                    fill: Paint::Radial { stops, .. },
                    ..
                } => Some(stops[0].color),
                _ => None,
            })
            .collect();
        assert_eq!(base_colors.len(), 10);
        assert_eq!(base_colors[8], base_colors[0]);
        assert_eq!(base_colors[9], base_colors[1]);
    }

    #[test]
    fn test_long_labels_truncated() {
        let choices = ChoiceSet::parse("An extremely long option that goes on");
        let commands = render_wheel(&choices, 0.0, &layout(), &EffectLayer::default(), 20);
        assert_eq!(commands.iter().find_map(DrawCommand::text), Some("An extremely long op"));
        assert_eq!(choices.get(0), Some("An extremely long option that goes on"));
    }

    #[test]
    fn test_sparks_drawn_with_life_alpha() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut effects = EffectLayer::default();
        effects.add_sparks(spark_burst(&mut rng, Vec2::new(575.0, 200.0)));
        effects.step_sparks();

        let choices = ChoiceSet::default();
        let commands = render_wheel(&choices, 0.0, &layout(), &effects, 20);
        let spark_alphas: Vec<f32> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle {
                    fill: Paint::Solid(color),
                    radius,
                    ..
                } if *radius < 3.0 => Some(color.a),
                _ => None,
            })
            .collect();
        assert_eq!(spark_alphas.len(), 3);
        assert!(spark_alphas.iter().all(|a| (a - 0.95).abs() < 1e-5));
    }

    #[test]
    fn test_tiny_viewport_does_not_go_negative() {
        let l = WheelLayout::from_viewport(&Viewport::new(10.0, 10.0, 1.0));
        assert_eq!(l.radius, 0.0);
    }
}
