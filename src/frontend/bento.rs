use crate::effects::bento::{
    is_mobile, spotlight_background, spotlight_frame, BentoConfig, CardMotion, FloatingParticle,
    Ripple, DEFAULT_PARTICLE_COUNT, DEFAULT_SPOTLIGHT_RADIUS, PARTICLE_COUNT_BOUNDS,
    PARTICLE_EXIT_MS, PARTICLE_FADE_IN_DELAY_MS, PARTICLE_STAGGER_MS, RIPPLE_LIFETIME_MS,
    RIPPLE_START_DELAY_MS, SPOTLIGHT_RADIUS_BOUNDS,
};
use crate::effects::Rect;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::dom::{
    by_id, client_point, data_config, document, now_ms, query_all_in, rect, rng, set_style,
    viewport_size,
};
use super::error::{EffectError, EffectResult};
use super::frame_loop::FrameLoop;

const GRID_ID: &str = "projects-bento-grid";
const FADE_TRANSITION: &str = "transform 0.3s, opacity 0.3s";

struct LiveParticle {
    element: Element,
    _frames: FrameLoop,
    _fade_in: Timeout,
}

impl LiveParticle {
    /// Stops floating and animates out; the node is removed once the exit transition ends.
    fn dismiss(self) {
        let LiveParticle { element, .. } = self;
        set_style(&element, "transition", FADE_TRANSITION);
        set_style(&element, "transform", "scale(0)");
        set_style(&element, "opacity", "0");
        Timeout::new(PARTICLE_EXIT_MS, move || element.remove()).forget();
    }
}

struct CardView {
    element: Element,
    config: BentoConfig,
    motion: RefCell<CardMotion>,
    particles: RefCell<Vec<LiveParticle>>,
    pending: RefCell<Vec<Timeout>>,
    rng: RefCell<fastrand::Rng>,
}

impl CardView {
    fn schedule_burst(self: &Rc<Self>) {
        let mut pending = self.pending.borrow_mut();
        for i in 0..self.config.particle_count {
            let view: Weak<Self> = Rc::downgrade(self);
            let delay = PARTICLE_STAGGER_MS.saturating_mul(i as u32);
            pending.push(Timeout::new(delay, move || {
                if let Some(view) = view.upgrade() {
                    view.spawn_particle();
                }
            }));
        }
    }

    fn spawn_particle(&self) {
        if !self.motion.borrow().is_hovered() {
            return;
        }
        let Some(doc) = document() else {
            return;
        };
        let Ok(element) = doc.create_element("div") else {
            return;
        };

        let bounds = rect(&self.element);
        let particle = FloatingParticle::spawn(&mut self.rng.borrow_mut(), bounds.width, bounds.height);
        element.set_class_name("particle");
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style().set_css_text(&particle.style());
        }
        if self.element.append_child(&element).is_err() {
            return;
        }
        set_style(&element, "transform", "scale(0)");
        set_style(&element, "opacity", "0");

        let fade_in = {
            let element = element.clone();
            Timeout::new(PARTICLE_FADE_IN_DELAY_MS, move || {
                set_style(&element, "transition", FADE_TRANSITION);
                set_style(&element, "transform", "scale(1)");
                set_style(&element, "opacity", "1");
            })
        };

        let started = now_ms();
        let floating = element.clone();
        let frames = FrameLoop::start(move |_| {
            let frame = particle.frame(now_ms() - started);
            set_style(&floating, "transform", &frame.transform());
            set_style(&floating, "opacity", &frame.opacity.to_string());
        });

        self.particles.borrow_mut().push(LiveParticle {
            element,
            _frames: frames,
            _fade_in: fade_in,
        });
    }

    fn clear_particles(&self) {
        self.pending.borrow_mut().clear();
        let live: Vec<LiveParticle> = self.particles.borrow_mut().drain(..).collect();
        for particle in live {
            particle.dismiss();
        }
    }

    fn ripple(&self, event: &MouseEvent) {
        let bounds = rect(&self.element);
        let ripple = Ripple::at(bounds.width, bounds.height, bounds.local(client_point(event)));

        let Some(element) = document().and_then(|doc| doc.create_element("div").ok()) else {
            return;
        };
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style().set_css_text(&ripple.style());
        }
        if self.element.append_child(&element).is_err() {
            return;
        }

        let expanding = element.clone();
        Timeout::new(RIPPLE_START_DELAY_MS, move || {
            set_style(&expanding, "transform", "scale(1)");
            set_style(&expanding, "opacity", "0");
        })
        .forget();
        Timeout::new(RIPPLE_LIFETIME_MS, move || element.remove()).forget();
    }
}

struct CardHandle {
    _frames: Option<FrameLoop>,
    _listeners: Vec<EventListener>,
}

fn mount_card(element: Element, config: BentoConfig, mobile: bool) -> CardHandle {
    let view = Rc::new(CardView {
        element: element.clone(),
        config,
        motion: RefCell::new(CardMotion::default()),
        particles: RefCell::new(Vec::new()),
        pending: RefCell::new(Vec::new()),
        rng: RefCell::new(rng()),
    });

    let frames = (!mobile).then(|| {
        let view = view.clone();
        FrameLoop::start(move |_| {
            let frame = view.motion.borrow_mut().step();
            set_style(&view.element, "transform", &frame.transform());
        })
    });

    let mut listeners = Vec::with_capacity(4);
    {
        let view = view.clone();
        listeners.push(EventListener::new(&element, "mouseenter", move |_| {
            view.motion.borrow_mut().pointer_enter();
            if !mobile {
                view.schedule_burst();
            }
        }));
    }
    {
        let view = view.clone();
        listeners.push(EventListener::new(&element, "mouseleave", move |_| {
            view.motion.borrow_mut().pointer_leave();
            view.clear_particles();
        }));
    }
    if !mobile {
        let view = view.clone();
        listeners.push(EventListener::new(&element, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let bounds = rect(&view.element);
                view.motion
                    .borrow_mut()
                    .pointer_move(bounds, client_point(event));
            }
        }));
    }
    listeners.push(EventListener::new(&element, "click", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            view.ripple(event);
        }
    }));

    CardHandle {
        _frames: frames,
        _listeners: listeners,
    }
}

pub struct BentoGrid {
    spotlight: Element,
    _cards: Vec<CardHandle>,
    _listeners: Vec<EventListener>,
}

impl Drop for BentoGrid {
    fn drop(&mut self) {
        self.spotlight.remove();
    }
}

fn hide_spotlight(spotlight: &Element, cards: &[Element]) {
    set_style(spotlight, "opacity", "0");
    for card in cards {
        set_style(card, "--glow-intensity", "0");
    }
}

pub fn mount() -> EffectResult<Option<BentoGrid>> {
    let Some(grid) = by_id::<Element>(GRID_ID) else {
        return Ok(None);
    };
    let doc = document().ok_or(EffectError::MissingElement("document"))?;
    let body = doc.body().ok_or(EffectError::MissingElement("body"))?;

    let config = BentoConfig {
        particle_count: data_config(
            &grid,
            "data-particle-count",
            DEFAULT_PARTICLE_COUNT,
            PARTICLE_COUNT_BOUNDS,
        ),
        spotlight_radius: data_config(
            &grid,
            "data-spotlight-radius",
            DEFAULT_SPOTLIGHT_RADIUS,
            SPOTLIGHT_RADIUS_BOUNDS,
        ),
    };
    let mobile = is_mobile(viewport_size().0);

    let spotlight = doc.create_element("div")?;
    spotlight.set_class_name("global-spotlight");
    set_style(&spotlight, "background", &spotlight_background());
    body.append_child(&spotlight)?;

    let cards = query_all_in(&grid, ".magic-bento-card");
    let handles = cards
        .iter()
        .map(|card| mount_card(card.clone(), config, mobile))
        .collect();

    let section = grid
        .closest(".bento-section")
        .ok()
        .flatten()
        .unwrap_or_else(|| grid.clone());

    let mut listeners = Vec::with_capacity(2);
    {
        let (spotlight, cards) = (spotlight.clone(), cards.clone());
        listeners.push(EventListener::new(&doc, "mousemove", move |event| {
            if mobile {
                return;
            }
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let cursor = client_point(event);
            let rects: Vec<Rect> = cards.iter().map(rect).collect();

            let Some(frame) = spotlight_frame(rect(&section), &rects, cursor, &config) else {
                hide_spotlight(&spotlight, &cards);
                return;
            };

            set_style(&spotlight, "left", &format!("{}px", cursor.x));
            set_style(&spotlight, "top", &format!("{}px", cursor.y));
            for (card, glow) in cards.iter().zip(&frame.glows) {
                set_style(card, "--glow-x", &format!("{}%", glow.x_percent));
                set_style(card, "--glow-y", &format!("{}%", glow.y_percent));
                set_style(card, "--glow-intensity", &glow.intensity.to_string());
                set_style(card, "--glow-radius", &format!("{}px", config.spotlight_radius));
            }
            set_style(&spotlight, "transition", frame.transition());
            set_style(&spotlight, "opacity", &frame.opacity.to_string());
        }));
    }
    {
        let (spotlight, cards) = (spotlight.clone(), cards.clone());
        listeners.push(EventListener::new(&doc, "mouseleave", move |_| {
            hide_spotlight(&spotlight, &cards);
        }));
    }

    log::debug!(
        "bento grid mounted with {} cards (mobile: {mobile})",
        cards.len()
    );
    Ok(Some(BentoGrid {
        spotlight,
        _cards: handles,
        _listeners: listeners,
    }))
}
