//! Headless walkthrough: drives a camera with scripted pointer input and
//! records the world-space drawing each frame would produce.

use anyhow::{Context, Result};
use vista_engine::camera::{Camera, CameraConfig, PanZoomControls, ScaleLimits};
use vista_engine::coords::{Rect, Vec2, Viewport};
use vista_engine::input::{ButtonState, InputEvent, InputFrame, InputState, Modifiers, MouseButton, MouseWheelDelta};
use vista_engine::logging::{init_logging, LoggingConfig};
use vista_engine::paint::Color;
use vista_engine::render::{DecalId, RecordingRenderer, Renderer};

const SCREEN: Viewport = Viewport::new(1280.0, 720.0);
const TILE: f32 = 32.0;
const WORLD_TILES: i32 = 256;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = CameraConfig {
        scale_limits: Some(ScaleLimits::new(0.05, 16.0).context("scale limits")?),
        ..CameraConfig::default()
    };
    let mut camera = Camera::with_config(SCREEN, config).context("creating camera")?;
    camera
        .fit_world_rect(Rect::new(0.0, 0.0, TILE * 16.0, TILE * 9.0), 16.0)
        .context("framing start area")?;

    let controls = PanZoomControls::default();
    let mut input = InputState::default();
    let mut frame = InputFrame::default();
    let mut renderer = RecordingRenderer::new(SCREEN);

    for (index, events) in script().into_iter().enumerate() {
        frame.clear();
        for ev in events {
            input.apply_event(&mut frame, ev);
        }
        controls
            .apply(&mut camera, &input, &frame)
            .with_context(|| format!("applying input for frame {index}"))?;

        if index == 5 {
            let pivot = SCREEN.center();
            camera
                .rotate_at(pivot, std::f32::consts::FRAC_PI_8)
                .context("rotating about screen center")?;
        }

        renderer.clear();
        let drawn = draw_frame(&camera, &mut renderer)?;

        let visible = camera.viewport_world_aabb().context("visible area")?;
        log::info!(
            "frame {index}: scale {:.3}, rotation {:.3}, visible {:.0}x{:.0} at ({:.0}, {:.0}), {drawn} tiles, {} calls",
            camera.scale().x,
            camera.rotation(),
            visible.size.x,
            visible.size.y,
            visible.origin.x,
            visible.origin.y,
            renderer.calls().len(),
        );
    }

    let snapshot = camera.snapshot();
    log::info!(
        "final camera: offset ({:.2}, {:.2}), scale {:.3}, rotation {:.3}",
        snapshot.offset.x,
        snapshot.offset.y,
        snapshot.scale.x,
        snapshot.rotation,
    );

    Ok(())
}

/// Draws the tiles that intersect the view plus a marker decal; returns the tile count.
fn draw_frame<R: Renderer>(camera: &Camera, renderer: &mut R) -> Result<usize> {
    let mut draw = camera.draw(renderer);
    let visible = draw.viewport_world_aabb().context("culling bounds")?;

    let first = (visible.min() / TILE).max(Vec2::ZERO);
    let last = (visible.max() / TILE).min(Vec2::splat(WORLD_TILES as f32 - 1.0));

    let mut drawn = 0;
    for ty in first.y.floor() as i32..=last.y.floor() as i32 {
        for tx in first.x.floor() as i32..=last.x.floor() as i32 {
            let pos = Vec2::new(tx as f32, ty as f32) * TILE;
            let shade = if (tx + ty) % 2 == 0 { 0.25 } else { 0.35 };
            draw.fill_rect(pos, Vec2::splat(TILE), Color::new(shade, shade, shade, 1.0));
            drawn += 1;
        }
    }

    draw.draw_circle(Vec2::splat(TILE * 4.0), TILE, Color::WHITE);
    draw.draw_decal(Vec2::splat(TILE * 8.0), DecalId(0), Vec2::ONE, Color::WHITE);
    draw.draw_string(Vec2::new(TILE, TILE), "origin", Color::WHITE, 1.0);

    Ok(drawn)
}

/// Scripted pointer session: drag the map, zoom in and out at the cursor,
/// then shift + wheel to rotate.
fn script() -> Vec<Vec<InputEvent>> {
    let moved = |x: f32, y: f32| InputEvent::PointerMoved { x, y };
    let middle = |state| InputEvent::PointerButton { button: MouseButton::Middle, state };
    let wheel = |y: f32| InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y });
    let shift = |held: bool| InputEvent::ModifiersChanged(Modifiers { shift: held, ..Modifiers::default() });

    vec![
        vec![InputEvent::Focused(true), moved(640.0, 360.0)],
        vec![middle(ButtonState::Pressed)],
        vec![moved(600.0, 340.0)],
        vec![moved(520.0, 300.0)],
        vec![moved(480.0, 280.0), middle(ButtonState::Released)],
        vec![wheel(3.0)],
        vec![moved(900.0, 200.0), wheel(2.0)],
        vec![wheel(-6.0)],
        vec![shift(true), wheel(3.0)],
        vec![shift(false), InputEvent::PointerLeft],
    ]
}
