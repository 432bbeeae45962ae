use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("canvas `{0}` has no 2d context")]
    NoContext(&'static str),
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return Self::Js(String::from(error.message()));
        }
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type EffectResult<T> = Result<T, EffectError>;
