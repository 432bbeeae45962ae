use crate::effects::skills_web::{
    highlight_segment, parse_level, web_segments, Segment, SkillNode, GLOW_RADIUS,
    HOVER_RADIUS, HOVER_SHADOW_BLUR, SETTLE_DELAY_MS,
};
use crate::effects::Point;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement};

use super::dom::{by_id, context_2d, query, query_all, rect};
use super::error::EffectResult;

const CANVAS_ID: &str = "skills-web";

struct WebView {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    container: Option<HtmlElement>,
    nodes: Vec<Element>,
}

impl WebView {
    fn center(&self) -> Point {
        Point::new(
            f64::from(self.canvas.width()) / 2.0,
            f64::from(self.canvas.height()) / 2.0,
        )
    }

    /// Node centers from the current layout; never cached between draws.
    fn positions(&self) -> Vec<SkillNode> {
        let canvas_rect = rect(&self.canvas);
        self.nodes
            .iter()
            .map(|node| {
                let level = parse_level(node.get_attribute("data-level").as_deref());
                SkillNode::from_rects(rect(node), canvas_rect, level)
            })
            .collect()
    }

    fn resize(&self) {
        if let Some(container) = &self.container {
            self.canvas.set_width(container.offset_width().max(0) as u32);
            self.canvas.set_height(container.offset_height().max(0) as u32);
        }
        self.draw_base();
    }

    fn stroke(&self, segment: &Segment) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(segment.from.x, segment.from.y);
        ctx.line_to(segment.to.x, segment.to.y);
        ctx.set_stroke_style_str(&segment.stroke_style());
        ctx.set_line_width(segment.width);
        ctx.stroke();
    }

    fn draw_base(&self) {
        let (width, height) = (
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        self.ctx.clear_rect(0.0, 0.0, width, height);

        let center = self.center();
        for segment in web_segments(center, &self.positions()) {
            self.stroke(&segment);
        }

        if let Ok(glow) =
            self.ctx
                .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, GLOW_RADIUS)
        {
            let _ = glow.add_color_stop(0.0, "rgba(255, 255, 255, 0.1)");
            let _ = glow.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
            self.ctx.set_fill_style_canvas_gradient(&glow);
            self.ctx.fill_rect(0.0, 0.0, width, height);
        }
    }

    fn draw_highlight(&self, index: usize) {
        self.draw_base();

        let Some(node) = self.positions().get(index).copied() else {
            return;
        };
        self.stroke(&highlight_segment(self.center(), &node));

        let ctx = &self.ctx;
        ctx.set_shadow_blur(HOVER_SHADOW_BLUR);
        ctx.set_shadow_color("rgba(255, 255, 255, 0.5)");
        ctx.begin_path();
        let _ = ctx.arc(node.position.x, node.position.y, HOVER_RADIUS, 0.0, TAU);
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.2)");
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}

pub struct SkillsWeb {
    _listeners: Vec<EventListener>,
    _settle: Timeout,
}

pub fn mount() -> EffectResult<Option<SkillsWeb>> {
    let Some(canvas) = by_id::<HtmlCanvasElement>(CANVAS_ID) else {
        return Ok(None);
    };
    let Some(win) = window() else {
        return Ok(None);
    };

    let ctx = context_2d(&canvas, CANVAS_ID)?;
    let view = Rc::new(WebView {
        canvas,
        ctx,
        container: query(".skills-web-container").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        nodes: query_all(".skill-node"),
    });
    view.resize();

    let mut listeners = Vec::with_capacity(view.nodes.len() * 2 + 1);
    for (index, node) in view.nodes.iter().enumerate() {
        let enter = view.clone();
        listeners.push(EventListener::new(node, "mouseenter", move |_| {
            enter.draw_highlight(index);
        }));
        let leave = view.clone();
        listeners.push(EventListener::new(node, "mouseleave", move |_| {
            leave.draw_base();
        }));
    }

    let on_resize = view.clone();
    listeners.push(EventListener::new(&win, "resize", move |_| on_resize.resize()));

    let settle = {
        let view = view.clone();
        Timeout::new(SETTLE_DELAY_MS, move || view.resize())
    };

    log::debug!("skills web mounted with {} nodes", view.nodes.len());
    Ok(Some(SkillsWeb {
        _listeners: listeners,
        _settle: settle,
    }))
}
