use crate::dom::EventListener;
use crate::frame::SharedSampler;
use glam::Vec2;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Subscribes the sampler to window `pointermove` and `scroll`. Timestamps
/// are measured from `origin`.
pub fn wire_viewport_events(
    window: &web::Window,
    sampler: &SharedSampler,
    origin: Instant,
) -> anyhow::Result<Vec<EventListener>> {
    let target: &web::EventTarget = window.as_ref();

    let pointer_sampler = Rc::downgrade(sampler);
    let pointer = EventListener::new(target, "pointermove", true, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(s) = pointer_sampler.upgrade() {
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            s.borrow_mut().pointer.on_event(origin.elapsed(), pos);
        }
    })?;

    let scroll_sampler = Rc::downgrade(sampler);
    let scroll_window = window.clone();
    let scroll = EventListener::new(target, "scroll", true, move |_ev: web::Event| {
        let Ok(y) = scroll_window.scroll_y() else {
            return;
        };
        if let Some(s) = scroll_sampler.upgrade() {
            s.borrow_mut().scroll.on_event(origin.elapsed(), y as f32);
        }
    })?;

    Ok(vec![pointer, scroll])
}
