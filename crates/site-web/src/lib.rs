#![cfg(target_arch = "wasm32")]
use site_core::SiteConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod head;
mod page;
mod render;
mod style;

pub use page::StudioPage;

thread_local! {
    static PAGE: RefCell<Option<StudioPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Config used for the live page. Particle jitter is reseeded per load.
pub fn live_config() -> SiteConfig {
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    SiteConfig {
        particle_seed: seed,
        ..SiteConfig::default()
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let page = StudioPage::mount(&window, live_config())?;
    let previous = PAGE.with(|p| p.borrow_mut().replace(page));
    drop(previous);
    Ok(())
}

/// Tears the page down and removes it from the document. Safe to call twice.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    drop(page);
}
