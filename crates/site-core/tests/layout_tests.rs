// Host-side tests for decor offsets, the particle field and page content.

use glam::Vec2;
use site_core::*;

#[test]
fn grid_translation_is_linear_in_scroll() {
    let cfg = ParallaxConfig::default();
    let at = |scroll: f32| {
        DecorLayout::compute(&cfg, &ViewportSignals::default().with_scroll(scroll)).grid_translate_y
    };
    assert_eq!(at(0.0), 0.0);
    assert!((at(200.0) - 2.0 * at(100.0)).abs() < 1e-4);
}

#[test]
fn orbs_move_in_opposite_directions() {
    let cfg = ParallaxConfig::default();
    let rest = DecorLayout::compute(&cfg, &ViewportSignals::default());
    let scrolled = DecorLayout::compute(&cfg, &ViewportSignals::default().with_scroll(300.0));
    assert!(scrolled.orb_percent[0] < rest.orb_percent[0]);
    assert!(scrolled.orb_percent[1] > rest.orb_percent[1]);
}

#[test]
fn pointer_only_moves_the_glow() {
    let cfg = ParallaxConfig::default();
    let rest = DecorLayout::compute(&cfg, &ViewportSignals::default());
    let moved = DecorLayout::compute(
        &cfg,
        &ViewportSignals::default().with_pointer(Vec2::new(500.0, 20.0)),
    );
    assert_eq!(rest.orb_percent, moved.orb_percent);
    assert_eq!(rest.grid_translate_y, moved.grid_translate_y);
    assert_ne!(rest.glow_origin, moved.glow_origin);
}

#[test]
fn particle_field_is_deterministic_per_seed() {
    let cfg = ParticleConfig::default();
    let a = ParticleField::generate(&cfg, 7);
    let b = ParticleField::generate(&cfg, 7);
    let c = ParticleField::generate(&cfg, 8);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn particles_stay_inside_the_viewport() {
    let cfg = ParticleConfig {
        circles: 60,
        squares: 30,
        triangles: 30,
        hexagons: 30,
        pluses: 30,
    };
    let field = ParticleField::generate(&cfg, DEFAULT_PARTICLE_SEED);
    assert_eq!(field.len(), cfg.total());
    for p in &field.particles {
        assert!((0.0..=100.0).contains(&p.left), "{:?} left {}", p.kind, p.left);
        assert!((0.0..=100.0).contains(&p.top), "{:?} top {}", p.kind, p.top);
        assert!(p.duration_sec > 0.0);
        assert!(p.delay_sec >= 0.0);
    }
}

#[test]
fn field_follows_configured_counts() {
    let cfg = ParticleConfig {
        circles: 3,
        squares: 0,
        triangles: 1,
        hexagons: 0,
        pluses: 2,
    };
    let field = ParticleField::generate(&cfg, 1);
    for kind in ParticleKind::ALL {
        assert_eq!(field.of_kind(kind).count(), cfg.count(kind));
    }
    let empty = ParticleField::generate(
        &ParticleConfig {
            circles: 0,
            squares: 0,
            triangles: 0,
            hexagons: 0,
            pluses: 0,
        },
        1,
    );
    assert!(empty.is_empty());
}

#[test]
fn content_links_are_fixed() {
    let page = PageContent::studio();
    let hrefs: Vec<&str> = page.links().iter().map(|l| l.href).collect();
    assert_eq!(
        hrefs,
        vec![
            "https://forms.gle/kHZZoGRqsYcyX4iG8",
            "https://www.etsy.com/shop/your-shop-name",
            "mailto:hello@lance-studio.com",
        ]
    );
}

#[test]
fn only_external_links_open_new_tabs() {
    let page = PageContent::studio();
    for link in page.links() {
        let external = link.href.starts_with("https://");
        assert_eq!(link.target().is_some(), external);
        assert_eq!(link.rel(), external.then_some("noopener noreferrer"));
    }
}

#[test]
fn two_product_cards() {
    let page = PageContent::studio();
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.products[0].title, "Spool Tracker");
    assert!(matches!(page.products[1].art, CardArt::Tiles(_)));
}
