use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::{self, RafScheduler, SharedSampler};
use crate::head::BrowserHead;
use crate::render;
use crate::style;
use instant::Instant;
use site_core::{
    apply_metadata, DecorLayout, PageContent, PageMetadata, ParticleField, SiteConfig, StreamPhase,
    ViewportSampler, ViewportSignals,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `pagehide` that may come back from the back/forward cache is not an
/// unload: the page is frozen there and listeners resume on restore.
fn unloads(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::PageTransitionEvent>()
        .map_or(true, |t| !t.persisted())
}

/// Event subscriptions and the sampler, released together.
struct Lifecycle {
    sampler: SharedSampler,
    listeners: RefCell<Vec<EventListener>>,
}

impl Lifecycle {
    fn teardown(&self) {
        for l in self.listeners.borrow_mut().iter_mut() {
            l.detach();
        }
        self.sampler.borrow_mut().teardown();
    }
}

/// The displayed page. Dropping it tears everything down and removes the
/// mounted DOM.
pub struct StudioPage {
    root: web::Element,
    lifecycle: Rc<Lifecycle>,
}

impl StudioPage {
    pub fn mount(window: &web::Window, config: SiteConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let outcome = apply_metadata(&mut BrowserHead::new(document.clone()), &PageMetadata::studio())?;
        log::debug!("[page] metadata {:?}", outcome);
        style::inject(&document)?;

        let particles = ParticleField::generate(&config.particles, config.particle_seed);
        let mounted = render::build_page(&document, &PageContent::studio(), &particles)?;
        let decor = Rc::new(mounted.decor);
        decor.apply(&DecorLayout::compute(&config.parallax, &ViewportSignals::default()));

        let sampler: SharedSampler = Rc::new(RefCell::new(ViewportSampler::new(
            &config,
            RafScheduler::new(window.clone()),
            RafScheduler::new(window.clone()),
        )));
        frame::install_publishers(&sampler, &decor, &config.parallax);
        let listeners = events::wire_viewport_events(window, &sampler, Instant::now())?;

        let lifecycle = Rc::new(Lifecycle {
            sampler,
            listeners: RefCell::new(listeners),
        });
        let weak = Rc::downgrade(&lifecycle);
        let target: &web::EventTarget = window.as_ref();
        let pagehide = EventListener::new(target, "pagehide", false, move |ev: web::Event| {
            if !unloads(&ev) {
                log::debug!("[page] pagehide into back/forward cache; keeping listeners");
                return;
            }
            if let Some(l) = weak.upgrade() {
                log::info!("[page] pagehide; releasing viewport listeners");
                l.teardown();
            }
        })?;
        lifecycle.listeners.borrow_mut().push(pagehide);

        let host = match document.get_element_by_id("app") {
            Some(el) => el,
            None => document
                .body()
                .map(web::Element::from)
                .ok_or_else(|| anyhow::anyhow!("no <body>"))?,
        };
        dom::append(&host, &mounted.root)?;

        log::info!(
            "[page] mounted: {} particles, sampling every {:?}/{:?}",
            particles.len(),
            config.pointer_interval,
            config.scroll_interval
        );
        Ok(Self {
            root: mounted.root,
            lifecycle,
        })
    }

    /// Stops sampling and cancels pending frames. The DOM stays in place.
    /// Idempotent.
    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifecycle.sampler.borrow().is_torn_down()
    }

    pub fn signals(&self) -> ViewportSignals {
        self.lifecycle.sampler.borrow().signals()
    }

    pub fn pointer_phase(&self) -> StreamPhase {
        self.lifecycle.sampler.borrow().pointer.phase()
    }

    pub fn scroll_phase(&self) -> StreamPhase {
        self.lifecycle.sampler.borrow().scroll.phase()
    }

    pub fn root(&self) -> &web::Element {
        &self.root
    }
}

impl Drop for StudioPage {
    fn drop(&mut self) {
        self.teardown();
        self.root.remove();
        log::info!("[page] unmounted");
    }
}
