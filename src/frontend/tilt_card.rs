use crate::effects::tilt::{
    TiltConfig, TiltState, DEFAULT_ROTATE_AMPLITUDE, DEFAULT_SCALE_ON_HOVER,
    ROTATE_AMPLITUDE_BOUNDS, SCALE_ON_HOVER_BOUNDS,
};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::dom::{by_id, client_point, data_config, query_in, rect, set_style};
use super::error::{EffectError, EffectResult};
use super::frame_loop::FrameLoop;

const CARD_ID: &str = "about-tilted-card";

pub struct TiltCard {
    _frames: FrameLoop,
    _listeners: [EventListener; 3],
}

pub fn mount() -> EffectResult<Option<TiltCard>> {
    let Some(card) = by_id::<Element>(CARD_ID) else {
        return Ok(None);
    };
    let inner = query_in(&card, ".tilted-card-inner")
        .ok_or(EffectError::MissingElement(".tilted-card-inner"))?;
    let tooltip = query_in(&card, ".tilted-card-tooltip");

    let config = TiltConfig {
        rotate_amplitude: data_config(
            &card,
            "data-rotate-amplitude",
            DEFAULT_ROTATE_AMPLITUDE,
            ROTATE_AMPLITUDE_BOUNDS,
        ),
        scale_on_hover: data_config(
            &card,
            "data-scale-on-hover",
            DEFAULT_SCALE_ON_HOVER,
            SCALE_ON_HOVER_BOUNDS,
        ),
    };
    let state = Rc::new(RefCell::new(TiltState::new(config)));

    let on_move = {
        let (state, bounds, tooltip) = (state.clone(), card.clone(), tooltip.clone());
        EventListener::new(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let local = state
                .borrow_mut()
                .pointer_move(rect(&bounds), client_point(event));
            if let Some(tooltip) = &tooltip {
                set_style(tooltip, "left", &format!("{}px", local.x));
                set_style(tooltip, "top", &format!("{}px", local.y));
            }
        })
    };

    let on_enter = {
        let (state, tooltip) = (state.clone(), tooltip.clone());
        EventListener::new(&card, "mouseenter", move |_| {
            state.borrow_mut().pointer_enter();
            if let Some(tooltip) = &tooltip {
                set_style(tooltip, "opacity", "1");
            }
        })
    };

    let on_leave = {
        let (state, tooltip) = (state.clone(), tooltip.clone());
        EventListener::new(&card, "mouseleave", move |_| {
            state.borrow_mut().pointer_leave();
            if let Some(tooltip) = &tooltip {
                set_style(tooltip, "opacity", "0");
            }
        })
    };

    let frames = FrameLoop::start(move |_| {
        let frame = state.borrow_mut().step();
        set_style(&inner, "transform", &frame.card_transform());
        if let Some(tooltip) = &tooltip {
            set_style(tooltip, "transform", &frame.tooltip_transform());
        }
    });

    log::debug!("tilt card mounted on #{CARD_ID}");
    Ok(Some(TiltCard {
        _frames: frames,
        _listeners: [on_move, on_enter, on_leave],
    }))
}
