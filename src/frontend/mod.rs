//! Browser bindings: each effect mounts only when its mount point is on the page.

mod bento;
mod contact;
mod dom;
mod error;
mod frame_loop;
mod navigation;
mod observer;
mod particles;
mod skills_menu;
mod skills_web;
mod stats;
mod tilt_card;

use gloo_events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{window, PageTransitionEvent};

use error::EffectResult;

/// Everything mounted on the page; dropping it stops every loop, listener, observer and timer.
#[derive(Default)]
struct MountedEffects {
    particles: Option<particles::ParticleBackground>,
    skills_web: Option<skills_web::SkillsWeb>,
    navigation: Option<navigation::Navigation>,
    stats: Option<stats::StatCounters>,
    tilt_card: Option<tilt_card::TiltCard>,
    bento: Option<bento::BentoGrid>,
    skills_menu: Option<skills_menu::SkillsMenuApp>,
    contact: Option<contact::ContactForm>,
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedEffects>> = const { RefCell::new(None) };
}

fn mount_effect<T>(name: &str, mount: fn() -> EffectResult<Option<T>>) -> Option<T> {
    match mount() {
        Ok(Some(effect)) => Some(effect),
        Ok(None) => {
            log::debug!("{name}: mount point not found, skipping");
            None
        }
        Err(error) => {
            log::error!("{name}: {error}");
            None
        }
    }
}

fn greet() {
    log::info!("👋 Welcome to Love Agarwal's Portfolio!");
    log::info!("🚀 Building AI in Healthcare | Designer | Vibe Coder");
    log::info!("💡 Interested in collaboration? Let's connect!");
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let effects = MountedEffects {
        particles: mount_effect("particle field", particles::mount),
        skills_web: mount_effect("skills web", skills_web::mount),
        navigation: mount_effect("navigation", navigation::mount),
        stats: mount_effect("stat counters", stats::mount),
        tilt_card: mount_effect("tilt card", tilt_card::mount),
        bento: mount_effect("bento grid", bento::mount),
        skills_menu: mount_effect("skills menu", skills_menu::mount),
        contact: mount_effect("contact form", contact::mount),
    };
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(effects));
    greet();

    if let Some(win) = window() {
        EventListener::new(&win, "pagehide", |event| {
            let cached = event
                .dyn_ref::<PageTransitionEvent>()
                .is_some_and(|event| event.persisted());
            if !cached {
                teardown();
            }
        })
        .forget();
    }
}

/// Stops every mounted effect.
pub fn teardown() {
    let effects = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if effects.is_some() {
        log::debug!("tearing down page effects");
    }
    drop(effects);
}
