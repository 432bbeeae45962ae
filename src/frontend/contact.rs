use crate::effects::contact::{
    ContactFields, SubmitButton, SubmitOutcome, FORM_ENDPOINT, RESTORE_DELAY_MS,
};
use gloo_events::EventListener;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement, RequestMode};

use super::dom::{by_id, query_in};
use super::error::EffectResult;

const FORM_ID: &str = "contact-form";

pub struct ContactForm {
    _submit: EventListener,
}

pub fn mount() -> EffectResult<Option<ContactForm>> {
    let Some(form) = by_id::<HtmlFormElement>(FORM_ID) else {
        return Ok(None);
    };
    let Some(button) = query_in(&form, ".submit-btn-modern")
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        log::warn!("#{FORM_ID} has no submit button, leaving native submission in place");
        return Ok(None);
    };
    let label = query_in(&button, ".btn-text");
    let state = Rc::new(RefCell::new(SubmitButton::new(
        label
            .as_ref()
            .and_then(|label| label.text_content())
            .unwrap_or_default(),
    )));

    let target = form.clone();
    let submit = EventListener::new(&target, "submit", move |event| {
        event.prevent_default();
        if !state.borrow_mut().submit() {
            return;
        }
        render(&state.borrow(), &button, &label);

        let payload = read_fields(&form).encode();
        let (form, button, label, state) =
            (form.clone(), button.clone(), label.clone(), state.clone());
        spawn_local(async move {
            let outcome = match post(payload).await {
                Ok(()) => SubmitOutcome::Sent,
                Err(error) => {
                    log::error!("error submitting form: {error}");
                    SubmitOutcome::Failed
                }
            };
            state.borrow_mut().settle(outcome);
            render(&state.borrow(), &button, &label);

            Timeout::new(RESTORE_DELAY_MS, move || {
                let reset = state.borrow_mut().restore();
                render(&state.borrow(), &button, &label);
                if reset {
                    form.reset();
                }
            })
            .forget();
        });
    });

    log::debug!("contact form bridge mounted on #{FORM_ID}");
    Ok(Some(ContactForm { _submit: submit }))
}

fn render(state: &SubmitButton, button: &HtmlButtonElement, label: &Option<Element>) {
    if let Some(label) = label {
        label.set_text_content(Some(state.label()));
    }
    button.set_disabled(state.is_disabled());
}

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    let data = FormData::new_with_form(form).ok();
    ContactFields::from_lookup(|name| data.as_ref()?.get(name).as_string())
}

/// The collector answers with an opaque response, so only transport failures are observable.
async fn post(payload: String) -> Result<(), gloo_net::Error> {
    Request::post(FORM_ENDPOINT)
        .mode(RequestMode::NoCors)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(payload)?
        .send()
        .await?;
    Ok(())
}
