use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Slot = Rc<RefCell<Option<AnimationFrame>>>;

/// Self-rescheduling animation-frame loop. Dropping the handle cancels the pending frame.
pub struct FrameLoop {
    _slot: Slot,
}

impl FrameLoop {
    pub fn start<F>(callback: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let slot: Slot = Rc::new(RefCell::new(None));
        schedule(Rc::downgrade(&slot), Rc::new(RefCell::new(callback)));
        Self { _slot: slot }
    }
}

fn schedule<F>(slot: Weak<RefCell<Option<AnimationFrame>>>, callback: Rc<RefCell<F>>)
where
    F: FnMut(f64) + 'static,
{
    let Some(strong) = slot.upgrade() else {
        return;
    };

    let next_slot = slot.clone();
    let handle = request_animation_frame(move |timestamp| {
        if next_slot.strong_count() == 0 {
            return;
        }
        (callback.borrow_mut())(timestamp);
        schedule(next_slot, callback);
    });
    *strong.borrow_mut() = Some(handle);
}
