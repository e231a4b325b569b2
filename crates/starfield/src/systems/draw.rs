//! Frame rendering, back to front: background, galaxies, stars, comets.
//! Reads entity state only.

use glam::Vec2;

use crate::components::{Comet, Galaxy, Star};
use crate::core::bounds::SceneBounds;
use crate::renderer::{BlendMode, Canvas2d, Color, ColorStop, Paint};

/// Background gradient, top to bottom.
pub const SKY_TOP: Color = Color::hex(0x020417);
pub const SKY_BOTTOM: Color = Color::hex(0x04061a);

/// Glow radius relative to star size.
pub const STAR_GLOW_SCALE: f32 = 6.0;
/// Solid core radius relative to star size.
pub const STAR_CORE_SCALE: f32 = 0.9;
const STAR_MIN_RADIUS: f32 = 0.2;
const STAR_BASE_HUE: f32 = 200.0;

const COMET_TRAIL_WIDTH: f32 = 2.0;
const COMET_TRAIL_FACTOR: f32 = 0.4;
/// Trail length at which the trail spans the full `COMET_TRAIL_FACTOR` of velocity.
const COMET_REFERENCE_LENGTH: f32 = 150.0;
const COMET_HEAD_FACTOR: f32 = 0.1;

pub fn draw_background<C: Canvas2d + ?Sized>(canvas: &mut C, bounds: &SceneBounds) {
    let stops = [ColorStop::new(0.0, SKY_TOP), ColorStop::new(1.0, SKY_BOTTOM)];
    let paint = Paint::Linear {
        from: Vec2::ZERO,
        to: Vec2::new(0.0, bounds.height),
        stops: &stops,
    };
    canvas.fill_rect(Vec2::ZERO, Vec2::new(bounds.width, bounds.height), &paint);
}

pub fn draw_galaxies<C: Canvas2d + ?Sized>(canvas: &mut C, galaxies: &[Galaxy]) {
    for galaxy in galaxies {
        let (h, a) = (galaxy.hue, galaxy.alpha);
        let stops = [
            ColorStop::new(0.0, Color::hsla(h, 70.0, 60.0, a)),
            ColorStop::new(0.25, Color::hsla(h + 20.0, 70.0, 45.0, a * 0.7)),
            ColorStop::new(0.6, Color::hsla(h + 50.0, 70.0, 30.0, a * 0.25)),
            ColorStop::new(1.0, Color::TRANSPARENT),
        ];
        let paint = Paint::Radial {
            center: galaxy.position,
            radius: galaxy.radius,
            stops: &stops,
        };
        canvas.set_blend_mode(BlendMode::Lighter);
        canvas.fill_circle(galaxy.position, galaxy.radius, &paint);
        canvas.set_blend_mode(BlendMode::SourceOver);
    }
}

/// Each star is a wide soft glow plus a small solid core.
pub fn draw_stars<C: Canvas2d + ?Sized>(canvas: &mut C, stars: &[Star]) {
    for star in stars {
        let center = star.render_position();
        let radius = star.size.max(STAR_MIN_RADIUS);
        let alpha = star.current_alpha.clamp(0.0, 1.0);
        let glow_radius = radius * STAR_GLOW_SCALE;

        let stops = [
            ColorStop::new(0.0, Color::white(alpha)),
            ColorStop::new(0.2, Color::hsla(STAR_BASE_HUE + star.hue_shift, 90.0, 70.0, alpha * 0.6)),
            ColorStop::new(0.7, Color::TRANSPARENT),
        ];
        let glow = Paint::Radial { center, radius: glow_radius, stops: &stops };
        canvas.fill_circle(center, glow_radius, &glow);
        canvas.fill_circle(center, radius * STAR_CORE_SCALE, &Paint::Solid(Color::white(alpha)));
    }
}

/// Thin long trail behind the comet plus a thick short head, both additive.
pub fn draw_comets<C: Canvas2d + ?Sized>(canvas: &mut C, comets: &[Comet]) {
    for comet in comets {
        let color = Color::hsla(comet.hue, 90.0, 70.0, comet.alpha);
        let trail_end = comet.position
            - comet.velocity * (COMET_TRAIL_FACTOR * comet.length / COMET_REFERENCE_LENGTH);
        let head_end = comet.position - comet.velocity * COMET_HEAD_FACTOR;

        canvas.save();
        canvas.set_blend_mode(BlendMode::Lighter);
        canvas.stroke_line(comet.position, trail_end, COMET_TRAIL_WIDTH, color);
        canvas.stroke_line(comet.position, head_end, head_width(comet.length), color);
        canvas.restore();
    }
}

pub fn head_width(length: f32) -> f32 {
    5.0 + length * 0.05
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, Fill, RecordingCanvas};

    fn star_at(position: Vec2, size: f32, alpha: f32) -> Star {
        let mut rng = crate::core::rng::Rng::new(3);
        let bounds = SceneBounds::new(800.0, 600.0, 1.0);
        let mut star = Star::random(&mut rng, &bounds, &Default::default());
        star.position = position;
        star.velocity = Vec2::ZERO;
        star.size = size;
        star.tick(0.0, Vec2::ZERO, &bounds);
        star.current_alpha = alpha;
        star
    }

    #[test]
    fn background_covers_canvas() {
        let mut canvas = RecordingCanvas::new();
        let bounds = SceneBounds::new(1000.0, 700.0, 2.0);
        draw_background(&mut canvas, &bounds);
        match &canvas.commands()[0] {
            DrawCommand::FillRect { origin, size, fill: Fill::Linear { to, stops, .. } } => {
                assert_eq!(*origin, Vec2::ZERO);
                assert_eq!(*size, Vec2::new(1000.0, 700.0));
                assert_eq!(*to, Vec2::new(0.0, 700.0));
                assert_eq!(stops[0].color, SKY_TOP);
                assert_eq!(stops[1].color, SKY_BOTTOM);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn galaxies_draw_additively_with_four_stops() {
        let mut canvas = RecordingCanvas::new();
        let galaxy = Galaxy { position: Vec2::new(10.0, 20.0), radius: 300.0, hue: 220.0, alpha: 0.1, drift: 0.0 };
        draw_galaxies(&mut canvas, &[galaxy]);
        let cmds = canvas.commands();
        assert_eq!(cmds[0], DrawCommand::SetBlendMode(BlendMode::Lighter));
        match &cmds[1] {
            DrawCommand::FillCircle { radius, fill: Fill::Radial { stops, .. }, .. } => {
                assert_eq!(*radius, 300.0);
                assert_eq!(stops.len(), 4);
                assert_eq!(stops[3].color.alpha(), 0.0);
                assert_eq!(stops[1].color, Color::hsla(240.0, 70.0, 45.0, 0.1 * 0.7));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(cmds[2], DrawCommand::SetBlendMode(BlendMode::SourceOver));
        assert_eq!(canvas.blend_mode(), BlendMode::SourceOver);
    }

    #[test]
    fn star_glow_then_core() {
        let mut canvas = RecordingCanvas::new();
        let star = star_at(Vec2::new(50.0, 60.0), 2.0, 0.4);
        draw_stars(&mut canvas, &[star]);
        let cmds = canvas.commands();
        assert_eq!(cmds.len(), 2);
        match &cmds[0] {
            DrawCommand::FillCircle { center, radius, fill: Fill::Radial { stops, .. } } => {
                assert_eq!(*center, Vec2::new(50.0, 60.0));
                assert_eq!(*radius, 12.0);
                assert_eq!(stops[0].color, Color::white(0.4));
            }
            other => panic!("unexpected {:?}", other),
        }
        match &cmds[1] {
            DrawCommand::FillCircle { radius, fill: Fill::Solid(color), .. } => {
                assert!((*radius - 1.8).abs() < 1e-6);
                assert_eq!(*color, Color::white(0.4));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn star_alpha_and_radius_are_clamped() {
        let mut canvas = RecordingCanvas::new();
        let star = star_at(Vec2::ZERO, 0.05, 1.7);
        draw_stars(&mut canvas, &[star]);
        match &canvas.commands()[1] {
            DrawCommand::FillCircle { radius, fill: Fill::Solid(color), .. } => {
                assert!((*radius - 0.18).abs() < 1e-6);
                assert_eq!(color.alpha(), 1.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn comet_trail_and_head() {
        let mut canvas = RecordingCanvas::new();
        let mut comet = Comet::new(Vec2::new(500.0, 300.0), Vec2::new(2000.0, 0.0), 270.0, 150.0);
        comet.alpha = 0.5;
        draw_comets(&mut canvas, &[comet]);
        let cmds = canvas.commands();
        assert_eq!(cmds[0], DrawCommand::Save);
        assert_eq!(cmds[1], DrawCommand::SetBlendMode(BlendMode::Lighter));
        let color = Color::hsla(270.0, 90.0, 70.0, 0.5);
        assert_eq!(
            cmds[2],
            DrawCommand::StrokeLine { from: Vec2::new(500.0, 300.0), to: Vec2::new(-300.0, 300.0), width: 2.0, color }
        );
        assert_eq!(
            cmds[3],
            DrawCommand::StrokeLine { from: Vec2::new(500.0, 300.0), to: Vec2::new(300.0, 300.0), width: 12.5, color }
        );
        assert_eq!(cmds[4], DrawCommand::Restore);
        assert_eq!(canvas.blend_mode(), BlendMode::SourceOver);
    }
}
