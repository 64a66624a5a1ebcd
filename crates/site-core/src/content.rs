//! Static page content.
//!
//! Everything the visitor reads lives here as plain data. The web front-end
//! walks this model to build the DOM; nothing in it is computed at runtime.

pub const BETA_FORM_URL: &str = "https://forms.gle/kHZZoGRqsYcyX4iG8";
pub const STOREFRONT_URL: &str = "https://www.etsy.com/shop/your-shop-name";
pub const CONTACT_EMAIL: &str = "hello@lance-studio.com";
pub const CONTACT_MAILTO: &str = "mailto:hello@lance-studio.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub href: &'static str,
    /// Small line above the label, if any.
    pub caption: Option<&'static str>,
    pub label: &'static str,
    /// Opens in a new tab without referrer or opener.
    pub external: bool,
}

impl Link {
    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Violet,
    Emerald,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Violet => "accent-violet",
            Accent::Emerald => "accent-emerald",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardArt {
    Logo { src: &'static str, alt: &'static str },
    /// Grid of `n` tiles standing in for board game pieces.
    Tiles(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub art: CardArt,
    pub badge: Option<&'static str>,
    pub features: Vec<Feature>,
    pub cta: Link,
    pub note: Option<&'static str>,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionHeader {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub brand: &'static str,
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub header: SectionHeader,
    pub link: Link,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer {
    pub brand: &'static str,
    pub copyright: &'static str,
    pub tagline: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub hero: Hero,
    pub products_header: SectionHeader,
    pub products: Vec<ProductCard>,
    pub contact: Contact,
    pub footer: Footer,
}

impl PageContent {
    pub fn studio() -> Self {
        Self {
            hero: Hero {
                brand: "Lance Studio",
                status: "System Operational",
            },
            products_header: SectionHeader {
                eyebrow: "What We Build",
                title: "Our Products",
                blurb: "Discover our suite of tools and services designed to enhance your creative workflow.",
            },
            products: vec![
                ProductCard {
                    id: "spool-tracker",
                    title: "Spool Tracker",
                    blurb: "Manage your 3D printing filament inventory with precision. Track spool weight, usage, and materials, all in one beautiful app.",
                    art: CardArt::Logo {
                        src: "/spool-tracker-logo.png",
                        alt: "Spool Tracker Logo",
                    },
                    badge: Some("Beta Testing"),
                    features: Vec::new(),
                    cta: Link {
                        href: BETA_FORM_URL,
                        caption: Some("Request Beta Access"),
                        label: "Sign Up Form",
                        external: true,
                    },
                    note: Some("Limited beta spots available"),
                    accent: Accent::Violet,
                },
                ProductCard {
                    id: "tabletop",
                    title: "Tabletop Gaming Studio",
                    blurb: "Custom 3D printed terrain tiles, dungeon pieces, and tabletop accessories for board gamers and RPG enthusiasts.",
                    art: CardArt::Tiles(9),
                    badge: None,
                    features: vec![
                        Feature {
                            title: "Custom Terrain",
                            detail: "Modular dungeon tiles",
                        },
                        Feature {
                            title: "Game Pieces",
                            detail: "Tokens & accessories",
                        },
                        Feature {
                            title: "Made to Order",
                            detail: "Your custom designs",
                        },
                    ],
                    cta: Link {
                        href: STOREFRONT_URL,
                        caption: Some("Visit our"),
                        label: "Etsy Store",
                        external: true,
                    },
                    note: None,
                    accent: Accent::Emerald,
                },
            ],
            contact: Contact {
                header: SectionHeader {
                    eyebrow: "Get In Touch",
                    title: "Let's Create Together",
                    blurb: "Have a project in mind? Questions about our products? We'd love to hear from you.",
                },
                link: Link {
                    href: CONTACT_MAILTO,
                    caption: None,
                    label: CONTACT_EMAIL,
                    external: false,
                },
            },
            footer: Footer {
                brand: "Lance Studio",
                copyright: "\u{a9} 2026 Lance Studio. All rights reserved.",
                tagline: "Bridging digital logic and physical form.",
            },
        }
    }

    /// Every outbound link in document order.
    pub fn links(&self) -> Vec<&Link> {
        self.products
            .iter()
            .map(|p| &p.cta)
            .chain(std::iter::once(&self.contact.link))
            .collect()
    }
}
