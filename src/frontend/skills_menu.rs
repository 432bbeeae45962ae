use crate::effects::skill_tiles::{
    grid_lines, motion_classes, tile_at, FacePlacement, SkillTile, FACE_DESCRIPTION_SELECTOR,
    FACE_TITLE_SELECTOR, MENU_CANVAS_ID, RESIZE_DEBOUNCE_MS, SKILL_TILES, TILE_SIZE,
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlCanvasElement};
use yew::prelude::*;

use super::dom::{by_id, context_2d, document, query, set_style};
use super::error::{EffectError, EffectResult};

const FACE_HOST_CLASS: &str = "face-text";

#[wasm_bindgen]
extern "C" {
    /// 3D grid menu provided by the page's script bundle.
    type InfiniteGridMenu;

    #[wasm_bindgen(constructor, catch)]
    fn new(
        canvas: &HtmlCanvasElement,
        items: &Array,
        on_active_item_change: &js_sys::Function,
        on_movement_change: &js_sys::Function,
        on_init: &js_sys::Function,
    ) -> Result<InfiniteGridMenu, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn run(this: &InfiniteGridMenu) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn resize(this: &InfiniteGridMenu) -> Result<(), JsValue>;
}

fn render_tile(doc: &Document, tile: &SkillTile) -> EffectResult<String> {
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.unchecked_into();
    canvas.set_width(TILE_SIZE);
    canvas.set_height(TILE_SIZE);
    let ctx = context_2d(&canvas, "skill tile")?;
    let size = f64::from(TILE_SIZE);

    let background = ctx.create_linear_gradient(0.0, 0.0, size, size);
    background.add_color_stop(0.0, tile.color)?;
    background.add_color_stop(1.0, "#000000")?;
    ctx.set_fill_style_canvas_gradient(&background);
    ctx.fill_rect(0.0, 0.0, size, size);

    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.05)");
    ctx.set_line_width(2.0);
    for offset in grid_lines() {
        ctx.begin_path();
        ctx.move_to(offset, 0.0);
        ctx.line_to(offset, size);
        ctx.stroke();
        ctx.begin_path();
        ctx.move_to(0.0, offset);
        ctx.line_to(size, offset);
        ctx.stroke();
    }

    ctx.set_font("bold 300px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text(tile.emoji, 400.0, 350.0)?;

    ctx.set_font("bold 60px -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Arial");
    ctx.fill_text(tile.title, 400.0, 600.0)?;
    ctx.set_shadow_color(tile.color);
    ctx.set_shadow_blur(40.0);
    ctx.fill_text(tile.title, 400.0, 600.0)?;

    Ok(canvas.to_data_url()?)
}

fn menu_items(doc: &Document) -> EffectResult<Array> {
    let items = Array::new();
    for tile in &SKILL_TILES {
        let item = Object::new();
        Reflect::set(&item, &"image".into(), &render_tile(doc, tile)?.into())?;
        Reflect::set(&item, &"link".into(), &tile.link.into())?;
        Reflect::set(&item, &"title".into(), &tile.title.into())?;
        Reflect::set(&item, &"description".into(), &tile.description.into())?;
        items.push(&item);
    }
    Ok(items)
}

/// Keeps the external menu, its callbacks and the debounced resize alive together.
struct MenuBinding {
    _menu: Rc<RefCell<Option<InfiniteGridMenu>>>,
    _on_active: Closure<dyn FnMut(JsValue)>,
    _on_movement: Closure<dyn FnMut(JsValue)>,
    _on_init: Closure<dyn FnMut(JsValue)>,
    _resize: Option<EventListener>,
    _debounce: Rc<RefCell<Option<Timeout>>>,
}

impl MenuBinding {
    fn attach(
        canvas: HtmlCanvasElement,
        set_active: UseStateSetter<usize>,
        set_moving: UseStateSetter<bool>,
    ) -> EffectResult<Self> {
        let doc = document().ok_or(EffectError::MissingElement("document"))?;
        let items = menu_items(&doc)?;

        let on_active = Closure::<dyn FnMut(JsValue)>::new(move |index: JsValue| {
            let index = index.as_f64().unwrap_or(f64::NAN);
            if tile_at(index).is_some() {
                set_active.set(index as usize);
            }
        });
        let on_movement = Closure::<dyn FnMut(JsValue)>::new(move |is_moving: JsValue| {
            set_moving.set(is_moving.is_truthy());
        });
        let on_init = Closure::<dyn FnMut(JsValue)>::new(move |instance: JsValue| {
            if let Err(error) = instance.unchecked_into::<InfiniteGridMenu>().run() {
                log::error!("3d menu failed to start: {:?}", error);
            }
        });

        let menu = InfiniteGridMenu::new(
            &canvas,
            &items,
            on_active.as_ref().unchecked_ref(),
            on_movement.as_ref().unchecked_ref(),
            on_init.as_ref().unchecked_ref(),
        )?;
        let menu = Rc::new(RefCell::new(Some(menu)));

        let debounce: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let resize = window().map(|win| {
            let (menu, debounce) = (menu.clone(), debounce.clone());
            EventListener::new(&win, "resize", move |_| {
                let menu = menu.clone();
                let pending = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    if let Some(menu) = menu.borrow().as_ref() {
                        if let Err(error) = menu.resize() {
                            log::warn!("3d menu resize failed: {:?}", error);
                        }
                    }
                });
                debounce.borrow_mut().replace(pending);
            })
        });

        Ok(Self {
            _menu: menu,
            _on_active: on_active,
            _on_movement: on_movement,
            _on_init: on_init,
            _resize: resize,
            _debounce: debounce,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsMenuProps {
    pub canvas: HtmlCanvasElement,
    /// Whether the page carries face text for the active tile.
    pub face: bool,
}

#[function_component(SkillsMenu)]
fn skills_menu(props: &SkillsMenuProps) -> Html {
    let active = use_state(|| 0_usize);
    let moving = use_state(|| false);

    {
        let set_active = active.setter();
        let set_moving = moving.setter();
        use_effect_with(props.canvas.clone(), move |canvas| {
            let binding = MenuBinding::attach(canvas.clone(), set_active, set_moving)
                .map_err(|error| log::error!("3d skills menu unavailable: {error}"))
                .ok();
            move || drop(binding)
        });
    }

    if !props.face {
        return html! {};
    }

    let tile = SKILL_TILES.get(*active).unwrap_or(&SKILL_TILES[0]);
    let (face_class, _) = motion_classes(*moving);

    html! {
        <>
            <h2 class={classes!("face-title", face_class)}>{tile.title}</h2>
            <p class={classes!("face-description", face_class)}>{tile.description}</p>
        </>
    }
}

pub struct SkillsMenuApp {
    host: Element,
    handle: Option<yew::AppHandle<SkillsMenu>>,
}

impl Drop for SkillsMenuApp {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.destroy();
        }
        self.host.remove();
    }
}

/// Inserts the face host where the page's face text sits, replacing that text;
/// without face text the host goes right after the canvas and stays empty.
fn face_host(doc: &Document, canvas: &HtmlCanvasElement) -> EffectResult<(Element, bool)> {
    let host = doc.create_element("div")?;
    host.set_class_name(FACE_HOST_CLASS);
    set_style(&host, "display", "contents");

    let title = query(FACE_TITLE_SELECTOR);
    let description = query(FACE_DESCRIPTION_SELECTOR);
    let placement = FacePlacement::for_page(title.is_some(), description.is_some());
    match title.as_ref().or(description.as_ref()) {
        Some(anchor) => {
            anchor.before_with_node_1(&host)?;
            title.iter().chain(&description).for_each(Element::remove);
        }
        None => canvas.after_with_node_1(&host)?,
    }
    Ok((host, placement.renders_face()))
}

pub fn mount() -> EffectResult<Option<SkillsMenuApp>> {
    let Some(canvas) = by_id::<HtmlCanvasElement>(MENU_CANVAS_ID) else {
        return Ok(None);
    };
    let doc = document().ok_or(EffectError::MissingElement("document"))?;
    let (host, face) = face_host(&doc, &canvas)?;

    let handle = yew::Renderer::<SkillsMenu>::with_root_and_props(
        host.clone(),
        SkillsMenuProps { canvas, face },
    )
    .render();
    log::debug!("3d skills menu mounted on #{MENU_CANVAS_ID} (face: {face})");
    Ok(Some(SkillsMenuApp {
        host,
        handle: Some(handle),
    }))
}
