use crate::render::DecorNodes;
use site_core::{DecorLayout, FrameScheduler, ParallaxConfig, ViewportSampler, ViewportSignals};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSampler = Rc<RefCell<ViewportSampler<RafScheduler>>>;

/// `requestAnimationFrame` as a single-slot deferred task. The callback is
/// installed after the owning stream exists, since it needs to reach back
/// into it.
pub struct RafScheduler {
    window: web::Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    pub fn install(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    type Token = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let cb = self.callback.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, token: i32) {
        _ = self.window.cancel_animation_frame(token);
    }
}

#[derive(Clone, Copy)]
enum Stream {
    Pointer,
    Scroll,
}

fn publisher(
    sampler: Weak<RefCell<ViewportSampler<RafScheduler>>>,
    stream: Stream,
    decor: Rc<DecorNodes>,
    parallax: ParallaxConfig,
) -> Closure<dyn FnMut(f64)> {
    Closure::wrap(Box::new(move |_ts: f64| {
        let Some(sampler) = sampler.upgrade() else {
            return;
        };
        let published: Option<ViewportSignals> = {
            let mut s = sampler.borrow_mut();
            match stream {
                Stream::Pointer => s.publish_pointer(),
                Stream::Scroll => s.publish_scroll(),
            }
        };
        if let Some(signals) = published {
            decor.apply(&DecorLayout::compute(&parallax, &signals));
        }
    }) as Box<dyn FnMut(f64)>)
}

/// Wires each stream's frame callback to publish and re-lay out the decor.
pub fn install_publishers(sampler: &SharedSampler, decor: &Rc<DecorNodes>, parallax: &ParallaxConfig) {
    let pointer_cb = publisher(
        Rc::downgrade(sampler),
        Stream::Pointer,
        decor.clone(),
        parallax.clone(),
    );
    let scroll_cb = publisher(
        Rc::downgrade(sampler),
        Stream::Scroll,
        decor.clone(),
        parallax.clone(),
    );
    let mut s = sampler.borrow_mut();
    s.pointer.scheduler_mut().install(pointer_cb);
    s.scroll.scheduler_mut().install(scroll_cb);
}
