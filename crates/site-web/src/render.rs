use crate::dom::{append, append_text, as_html, el, js_err};
use site_core::{
    CardArt, DecorLayout, Link, PageContent, ParticleField, ProductCard, SectionHeader, ORBS,
};
use web_sys as web;

// DOM construction for the page and the moving decorative layers.

/// Elements whose position follows the published viewport signals.
pub struct DecorNodes {
    pub orbs: Vec<web::HtmlElement>,
    pub glow: web::HtmlElement,
    pub grid: web::HtmlElement,
}

impl DecorNodes {
    pub fn apply(&self, layout: &DecorLayout) {
        for (i, orb) in self.orbs.iter().enumerate() {
            let (prop, value) = layout.orb_offset_css(i);
            set_style(orb, prop, &value);
        }
        for (prop, value) in layout.glow_css() {
            set_style(&self.glow, prop, &value);
        }
        set_style(&self.grid, "transform", &layout.grid_transform_css());
    }
}

fn set_style(node: &web::HtmlElement, prop: &str, value: &str) {
    if let Err(e) = node.style().set_property(prop, value) {
        log::trace!("[decor] {}={} rejected: {:?}", prop, value, e);
    }
}

pub struct MountedPage {
    pub root: web::Element,
    pub decor: DecorNodes,
}

pub fn build_page(
    document: &web::Document,
    content: &PageContent,
    particles: &ParticleField,
) -> anyhow::Result<MountedPage> {
    let root = el(document, "div", "studio")?;
    root.set_id("studio-root");

    append(&root, &el(document, "div", "bg-gradient")?)?;
    let decor = build_background(document, &root)?;

    let main = el(document, "div", "content")?;
    build_hero(document, &main, content)?;
    build_products(document, &main, content)?;
    build_contact(document, &main, content)?;
    build_footer(document, &main, content)?;
    append(&root, &main)?;

    build_particles(document, &root, particles)?;
    Ok(MountedPage { root, decor })
}

fn build_background(document: &web::Document, root: &web::Element) -> anyhow::Result<DecorNodes> {
    let mut orbs = Vec::with_capacity(ORBS.len());
    for spec in ORBS.iter() {
        let orb = el(
            document,
            "div",
            if spec.delayed { "orb float-delayed" } else { "orb float" },
        )?;
        let style = format!(
            "width:{0}px;height:{0}px;{1}:{2}%;background:linear-gradient(to right, {3}, {4});filter:blur({5}px);opacity:{6};",
            spec.size_px,
            spec.horizontal.css(),
            spec.horizontal_percent,
            spec.gradient.0,
            spec.gradient.1,
            spec.blur_px,
            spec.opacity,
        );
        orb.set_attribute("style", &style).map_err(js_err)?;
        append(root, &orb)?;
        orbs.push(as_html(orb)?);
    }

    let glow = el(document, "div", "glow")?;
    append(root, &glow)?;
    let grid = el(document, "div", "grid-overlay")?;
    append(root, &grid)?;
    append(root, &el(document, "div", "noise")?)?;

    Ok(DecorNodes {
        orbs,
        glow: as_html(glow)?,
        grid: as_html(grid)?,
    })
}

fn build_header(
    document: &web::Document,
    parent: &web::Element,
    header: &SectionHeader,
) -> anyhow::Result<()> {
    let wrap = el(document, "div", "section-header")?;
    append_text(document, &wrap, "span", "eyebrow", header.eyebrow)?;
    append(&wrap, &el(document, "div", "rule")?)?;
    append_text(document, &wrap, "h3", "", header.title)?;
    append_text(document, &wrap, "p", "lede", header.blurb)?;
    append(parent, &wrap)
}

fn build_link(document: &web::Document, link: &Link, class: &str) -> anyhow::Result<web::Element> {
    let a = el(document, "a", class)?;
    a.set_attribute("href", link.href).map_err(js_err)?;
    if let Some(target) = link.target() {
        a.set_attribute("target", target).map_err(js_err)?;
    }
    if let Some(rel) = link.rel() {
        a.set_attribute("rel", rel).map_err(js_err)?;
    }
    let text = el(document, "span", "cta-text")?;
    if let Some(caption) = link.caption {
        append_text(document, &text, "span", "cta-caption", caption)?;
    }
    append_text(document, &text, "span", "cta-label", link.label)?;
    append(&a, &text)?;
    append_text(document, &a, "span", "cta-arrow", "\u{2192}")?;
    Ok(a)
}

fn build_hero(document: &web::Document, main: &web::Element, content: &PageContent) -> anyhow::Result<()> {
    let section = el(document, "section", "hero")?;
    append_text(document, &section, "h1", "brand fade-in", content.hero.brand)?;
    append(&section, &el(document, "div", "rule wide")?)?;
    let badge = el(document, "div", "status fade-in-delayed")?;
    append(&badge, &el(document, "span", "pulse-dot")?)?;
    append_text(document, &badge, "span", "", content.hero.status)?;
    append(&section, &badge)?;
    append(main, &section)
}

fn build_card(document: &web::Document, card: &ProductCard) -> anyhow::Result<web::Element> {
    let wrap = el(document, "div", &format!("card {}", card.accent.class()))?;
    wrap.set_id(card.id);

    let art = el(document, "div", "card-art")?;
    match &card.art {
        CardArt::Logo { src, alt } => {
            let img = el(document, "img", "")?;
            img.set_attribute("src", src).map_err(js_err)?;
            img.set_attribute("alt", alt).map_err(js_err)?;
            append(&art, &img)?;
        }
        CardArt::Tiles(n) => {
            let grid = el(document, "div", "tiles")?;
            for i in 0..*n {
                let tile = el(document, "div", "tile")?;
                let offset = if i % 2 == 0 { 0 } else { 2 };
                tile.set_attribute(
                    "style",
                    &format!("transition-delay:{}ms;transform:translateY({}px);", i * 30, offset),
                )
                .map_err(js_err)?;
                append(&grid, &tile)?;
            }
            append(&art, &grid)?;
        }
    }
    append(&wrap, &art)?;

    append_text(document, &wrap, "h4", "", card.title)?;
    append_text(document, &wrap, "p", "blurb", card.blurb)?;
    if let Some(badge) = card.badge {
        let b = el(document, "div", "badge")?;
        append(&b, &el(document, "span", "pulse-dot")?)?;
        append_text(document, &b, "span", "", badge)?;
        append(&wrap, &b)?;
    }
    if !card.features.is_empty() {
        let list = el(document, "ul", "features")?;
        for (i, f) in card.features.iter().enumerate() {
            let li = el(document, "li", "")?;
            li.set_attribute("style", &format!("transition-delay:{}ms;", i * 50))
                .map_err(js_err)?;
            append_text(document, &li, "strong", "", f.title)?;
            append_text(document, &li, "span", "", f.detail)?;
            append(&list, &li)?;
        }
        append(&wrap, &list)?;
    }
    append(&wrap, &build_link(document, &card.cta, "cta")?)?;
    if let Some(note) = card.note {
        append_text(document, &wrap, "p", "note", note)?;
    }
    Ok(wrap)
}

fn build_products(document: &web::Document, main: &web::Element, content: &PageContent) -> anyhow::Result<()> {
    let section = el(document, "section", "products")?;
    build_header(document, &section, &content.products_header)?;
    let grid = el(document, "div", "cards")?;
    for card in &content.products {
        append(&grid, &build_card(document, card)?)?;
    }
    append(&section, &grid)?;
    append(main, &section)
}

fn build_contact(document: &web::Document, main: &web::Element, content: &PageContent) -> anyhow::Result<()> {
    let section = el(document, "section", "contact")?;
    build_header(document, &section, &content.contact.header)?;
    append(&section, &build_link(document, &content.contact.link, "cta mail")?)?;
    append(main, &section)
}

fn build_footer(document: &web::Document, main: &web::Element, content: &PageContent) -> anyhow::Result<()> {
    let footer = el(document, "footer", "")?;
    append_text(document, &footer, "span", "eyebrow muted", content.footer.brand)?;
    append_text(document, &footer, "p", "copyright", content.footer.copyright)?;
    append_text(document, &footer, "p", "tagline", content.footer.tagline)?;
    append(main, &footer)
}

fn build_particles(document: &web::Document, root: &web::Element, field: &ParticleField) -> anyhow::Result<()> {
    let layer = el(document, "div", "particles")?;
    for p in &field.particles {
        let node = el(document, "div", &format!("particle {}", p.kind.name()))?;
        node.set_attribute("style", &p.css()).map_err(js_err)?;
        if let Some(glyph) = p.glyph() {
            node.set_text_content(Some(glyph));
        }
        append(&layer, &node)?;
    }
    append(root, &layer)
}
