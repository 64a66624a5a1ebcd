use crate::dom::js_err;
use site_core::HeadDocument;
use web_sys as web;

/// `HeadDocument` over the live browser document.
pub struct BrowserHead {
    document: web::Document,
}

impl BrowserHead {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl HeadDocument for BrowserHead {
    type Meta = web::Element;
    type Error = anyhow::Error;

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn find_metas(&self, name: &str) -> Vec<web::Element> {
        let selector = format!("meta[name=\"{name}\"]");
        let Ok(list) = self.document.query_selector_all(&selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| wasm_bindgen::JsCast::dyn_into::<web::Element>(n).ok())
            .collect()
    }

    fn set_meta_content(&mut self, meta: &web::Element, content: &str) -> anyhow::Result<()> {
        meta.set_attribute("content", content).map_err(js_err)
    }

    fn append_meta(&mut self, name: &str, content: &str) -> anyhow::Result<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
        let meta = self.document.create_element("meta").map_err(js_err)?;
        meta.set_attribute("name", name).map_err(js_err)?;
        meta.set_attribute("content", content).map_err(js_err)?;
        head.append_child(&meta).map_err(js_err)?;
        Ok(())
    }

    fn remove_meta(&mut self, meta: web::Element) -> anyhow::Result<()> {
        meta.remove();
        Ok(())
    }
}
