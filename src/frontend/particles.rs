use crate::effects::particle_field::{
    FieldConfig, ParticleField, DEFAULT_LINK_DISTANCE, DEFAULT_MAX_PARTICLES, LINK_DISTANCE_BOUNDS,
    MAX_PARTICLES_BOUNDS, PARTICLE_FILL,
};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom::{by_id, context_2d, data_config, rng, viewport_size};
use super::error::EffectResult;
use super::frame_loop::FrameLoop;

const CANVAS_ID: &str = "particles-canvas";

pub struct ParticleBackground {
    _frames: FrameLoop,
    _resize: EventListener,
}

pub fn mount() -> EffectResult<Option<ParticleBackground>> {
    let Some(canvas) = by_id::<HtmlCanvasElement>(CANVAS_ID) else {
        return Ok(None);
    };
    let Some(win) = window() else {
        return Ok(None);
    };
    let ctx = context_2d(&canvas, CANVAS_ID)?;

    let config = FieldConfig {
        max_particles: data_config(
            &canvas,
            "data-max-particles",
            DEFAULT_MAX_PARTICLES,
            MAX_PARTICLES_BOUNDS,
        ),
        link_distance: data_config(
            &canvas,
            "data-link-distance",
            DEFAULT_LINK_DISTANCE,
            LINK_DISTANCE_BOUNDS,
        ),
    };

    let mut rng = rng();
    let (width, height) = fit_to_viewport(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::new(config, width, height, &mut rng)));
    let rng = Rc::new(RefCell::new(rng));

    let resize = {
        let canvas = canvas.clone();
        let field = field.clone();
        EventListener::new(&win, "resize", move |_| {
            let (width, height) = fit_to_viewport(&canvas);
            field
                .borrow_mut()
                .reseed(width, height, &mut rng.borrow_mut());
        })
    };

    let frames = FrameLoop::start(move |_| {
        let mut field = field.borrow_mut();
        field.step();
        draw(&ctx, &field);
    });

    log::debug!("particle field mounted on #{CANVAS_ID}");
    Ok(Some(ParticleBackground {
        _frames: frames,
        _resize: resize,
    }))
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (f64::from(canvas.width()), f64::from(canvas.height()))
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(PARTICLE_FILL);
    for particle in field.particles() {
        ctx.begin_path();
        let _ = ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU);
        ctx.fill();
    }

    ctx.set_line_width(1.0);
    for link in field.links() {
        ctx.begin_path();
        ctx.set_stroke_style_str(&link.stroke_style());
        ctx.move_to(link.from.x, link.from.y);
        ctx.line_to(link.to.x, link.to.y);
        ctx.stroke();
    }
}
