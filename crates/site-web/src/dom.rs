use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Creates `<tag class="...">`.
pub fn el(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let e = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        e.set_class_name(class);
    }
    Ok(e)
}

/// Creates an element with text content and appends it to `parent`.
pub fn append_text(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::Element> {
    let e = el(document, tag, class)?;
    e.set_text_content(Some(text));
    parent.append_child(&e).map_err(js_err)?;
    Ok(e)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

pub fn as_html(e: web::Element) -> anyhow::Result<web::HtmlElement> {
    e.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))
}

/// A listener that stays attached until `detach` or drop.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
    attached: bool,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
            attached: true,
        })
    }

    /// Removes the listener but keeps the closure alive, so this is safe to
    /// call from inside the listener itself.
    pub fn detach(&mut self) {
        if self.attached {
            _ = self
                .target
                .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
            self.attached = false;
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.detach();
    }
}
