use crate::effects::stats::{parse_target, StatCounter, Tick, COUNTED_CLASS, STATS_THRESHOLD, TICK_MS};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

use super::dom::{query_all, set_class};
use super::error::EffectResult;
use super::observer::Observer;

type Running = Rc<RefCell<Vec<Option<Interval>>>>;

pub struct StatCounters {
    _observer: Observer,
    _running: Running,
}

pub fn mount() -> EffectResult<Option<StatCounters>> {
    let stats = query_all(".stat h3");
    if stats.is_empty() {
        return Ok(None);
    }

    let running: Running = Rc::new(RefCell::new(Vec::new()));
    let observer = {
        let running = running.clone();
        Observer::new(STATS_THRESHOLD, None, move |entry, _| {
            let target = entry.target();
            if !entry.is_intersecting() || target.class_list().contains(COUNTED_CLASS) {
                return;
            }
            set_class(&target, COUNTED_CLASS, true);
            start_count(target, &running);
        })?
    };

    for stat in &stats {
        observer.observe(stat);
    }

    log::debug!("stat counters mounted for {} headings", stats.len());
    Ok(Some(StatCounters {
        _observer: observer,
        _running: running,
    }))
}

fn start_count(heading: Element, running: &Running) {
    let mut counter = StatCounter::new(parse_target(&heading.text_content().unwrap_or_default()));
    let slot = {
        let mut running = running.borrow_mut();
        running.push(None);
        running.len() - 1
    };

    let finished = running.clone();
    let interval = Interval::new(TICK_MS, move || match counter.tick() {
        Tick::Running(text) => heading.set_text_content(Some(&text)),
        Tick::Done(text) => {
            heading.set_text_content(Some(&text));
            if let Some(done) = finished.borrow_mut().get_mut(slot) {
                done.take();
            }
        }
    });
    if let Some(entry) = running.borrow_mut().get_mut(slot) {
        *entry = Some(interval);
    }
}
