//! Scroll-driven page chrome: navbar state, active link, reveal, parallax,
//! the mobile menu and in-page anchor scrolling.

use crate::effects::scroll::{
    active_section, card_animation_delay, link_targets, navbar_scrolled, parallax_transform,
    MobileMenu, RevealLatch, ACTIVE_CLASS, REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SCROLLED_CLASS,
};
use gloo_events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom::{query, query_all, scroll_y, set_class, set_style};
use super::error::EffectResult;
use super::observer::Observer;

pub struct Navigation {
    _listeners: Vec<EventListener>,
    _reveal: Option<Observer>,
}

pub fn mount() -> EffectResult<Option<Navigation>> {
    let Some(win) = window() else {
        return Ok(None);
    };

    let mut listeners = Vec::new();

    if let Some(navbar) = query(".navbar") {
        listeners.push(EventListener::new(&win, "scroll", move |_| {
            set_class(&navbar, SCROLLED_CLASS, navbar_scrolled(scroll_y()));
        }));
    }

    let nav_links = query_all(".nav-link");
    let sections: Vec<HtmlElement> = query_all("section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();
    if !nav_links.is_empty() && !sections.is_empty() {
        let links = nav_links.clone();
        listeners.push(EventListener::new(&win, "scroll", move |_| {
            highlight_active_link(&sections, &links);
        }));
    }

    listeners.push(EventListener::new(&win, "scroll", move |_| {
        let Some(background) = query(".parallax-bg") else {
            return;
        };
        let container_top = background
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .map(|parent| f64::from(parent.offset_top()))
            .unwrap_or(0.0);
        set_style(
            &background,
            "transform",
            &parallax_transform(scroll_y(), container_top),
        );
    }));

    if let (Some(hamburger), Some(menu)) = (query(".hamburger"), query(".nav-menu")) {
        listeners.extend(mobile_menu(hamburger, menu, &nav_links));
    }

    for anchor in query_all("a[href^=\"#\"]") {
        let href = anchor.get_attribute("href").unwrap_or_default();
        listeners.push(EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();
            scroll_to(&href);
        }));
    }

    for (index, card) in query_all(".project-card").iter().enumerate() {
        set_style(card, "animation-delay", &card_animation_delay(index));
    }

    let reveal = reveal_sections()?;

    log::debug!("navigation effects mounted ({} listeners)", listeners.len());
    Ok(Some(Navigation {
        _listeners: listeners,
        _reveal: reveal,
    }))
}

fn highlight_active_link(sections: &[HtmlElement], links: &[Element]) {
    let ids: Vec<(String, f64)> = sections
        .iter()
        .map(|section| (section.id(), f64::from(section.offset_top())))
        .collect();
    let current = active_section(
        scroll_y(),
        ids.iter().map(|(id, top)| (id.as_str(), *top)),
    );

    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        let active = current.is_some_and(|id| link_targets(&href, id));
        set_class(link, ACTIVE_CLASS, active);
    }
}

fn mobile_menu(hamburger: Element, menu: Element, links: &[Element]) -> Vec<EventListener> {
    let state = Rc::new(Cell::new(MobileMenu::default()));
    let mut listeners = Vec::with_capacity(links.len() + 1);

    {
        let state = state.clone();
        let (button, menu) = (hamburger.clone(), menu.clone());
        listeners.push(EventListener::new(&hamburger, "click", move |_| {
            let mut next = state.get();
            let open = next.toggle();
            state.set(next);
            set_class(&button, ACTIVE_CLASS, open);
            set_class(&menu, ACTIVE_CLASS, open);
        }));
    }

    for link in links {
        let state = state.clone();
        let (button, menu) = (hamburger.clone(), menu.clone());
        listeners.push(EventListener::new(link, "click", move |_| {
            let mut next = state.get();
            next.close();
            state.set(next);
            set_class(&button, ACTIVE_CLASS, next.is_open());
            set_class(&menu, ACTIVE_CLASS, next.is_open());
        }));
    }

    listeners
}

fn scroll_to(href: &str) {
    let Some(target) = query(href) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn reveal_sections() -> EffectResult<Option<Observer>> {
    let sections = query_all(".reveal-section");
    if sections.is_empty() {
        return Ok(None);
    }

    let latches: Rc<RefCell<Vec<(Element, RevealLatch)>>> = Rc::new(RefCell::new(
        sections
            .iter()
            .map(|section| (section.clone(), RevealLatch::default()))
            .collect(),
    ));

    let observer = Observer::new(
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        move |entry, observer| {
            let target = entry.target();
            for (section, latch) in latches.borrow_mut().iter_mut() {
                if latch.is_revealed() || *section != target {
                    continue;
                }
                if latch.observe(entry.is_intersecting()) {
                    set_class(section, REVEALED_CLASS, true);
                    observer.unobserve(section);
                }
            }
        },
    )?;

    for section in &sections {
        observer.observe(section);
    }
    Ok(Some(observer))
}
