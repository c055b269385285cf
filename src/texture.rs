//! Procedural planet surfaces and the session-wide texture cache.
//!
//! Layouts are authored in a 1024-unit design space and scaled to the
//! requested resolution. Several surfaces scatter features at random, so two
//! syntheses of the same key are not pixel-identical; the cache makes the
//! first result the only one observed per session.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::HtmlCanvasElement;

use crate::raster::{Color, Raster};
use crate::rng::Rng;

const DESIGN_SPACE: f64 = 1024.0;

const MOUNTAIN_BROWN: Color = Color::rgb(0x8b, 0x45, 0x13);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    Earth,
    Gas,
    Rocky,
    Moon,
    Solid,
}

impl SurfaceType {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceType::Earth => "earth",
            SurfaceType::Gas => "gas",
            SurfaceType::Rocky => "rocky",
            SurfaceType::Moon => "moon",
            SurfaceType::Solid => "solid",
        }
    }
}

/// Ordered colors for a surface. Indexing past the end reuses the last entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Build from `#rrggbb` strings, skipping any that fail to parse.
    pub fn from_hex(colors: &[&str]) -> Self {
        Palette(colors.iter().filter_map(|c| Color::from_hex(c)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, i: usize) -> Color {
        match self.0.len() {
            0 => Color::GRAY,
            n => self.0[i.min(n - 1)],
        }
    }

    pub fn primary(&self) -> Color {
        self.get(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureKey {
    pub surface: SurfaceType,
    pub palette: Palette,
    pub size: u32,
}

pub struct Texture {
    raster: Raster,
    canvas: OnceCell<Option<HtmlCanvasElement>>,
}

impl Texture {
    /// Offscreen canvas holding the raster, uploaded on first use.
    pub fn canvas(&self) -> Option<&HtmlCanvasElement> {
        self.canvas
            .get_or_init(|| crate::canvas::raster_to_canvas(&self.raster))
            .as_ref()
    }
}

/// Memo of synthesized textures. Grows only; the key space is fixed by the
/// scene's hard-coded bodies.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<TextureKey, Rc<Texture>>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, key: TextureKey, rng: &mut Rng) -> Rc<Texture> {
        if let Some(texture) = self.entries.get(&key) {
            return texture.clone();
        }
        log::debug!("synthesizing {} texture at {}px", key.surface.name(), key.size);
        let raster = synthesize(key.surface, &key.palette, key.size, rng);
        let texture = Rc::new(Texture {
            raster,
            canvas: OnceCell::new(),
        });
        self.entries.insert(key, texture.clone());
        texture
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

thread_local! {
    static TEXTURES: RefCell<TextureCache> = RefCell::new(TextureCache::new());
    static TEXTURE_RNG: RefCell<Option<Rng>> = const { RefCell::new(None) };
}

/// Look up or synthesize through the session cache.
pub fn cached_texture(key: TextureKey) -> Rc<Texture> {
    TEXTURE_RNG.with(|r| {
        let mut slot = r.borrow_mut();
        let rng = slot.get_or_insert_with(Rng::from_entropy);
        TEXTURES.with(|cache| cache.borrow_mut().get_or_create(key, rng))
    })
}

pub fn synthesize(surface: SurfaceType, palette: &Palette, size: u32, rng: &mut Rng) -> Raster {
    let mut raster = Raster::new(size, size);
    let mut painter = Painter {
        raster: &mut raster,
        scale: size as f64 / DESIGN_SPACE,
    };
    match surface {
        SurfaceType::Earth => paint_earth(&mut painter, palette, rng),
        SurfaceType::Gas => paint_gas(&mut painter, palette, rng),
        SurfaceType::Rocky => paint_rocky(&mut painter, palette, rng),
        SurfaceType::Moon => paint_moon(&mut painter, palette, rng),
        SurfaceType::Solid => painter.fill(palette.primary()),
    }
    raster
}

/// Design-space view over a raster.
struct Painter<'a> {
    raster: &'a mut Raster,
    scale: f64,
}

impl Painter<'_> {
    fn fill(&mut self, color: Color) {
        self.raster.fill_rect(0.0, 0.0, DESIGN_SPACE * self.scale, DESIGN_SPACE * self.scale, color, 1.0);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color, alpha: f64) {
        let s = self.scale;
        self.raster.fill_rect(x * s, y * s, w * s, h * s, color, alpha);
    }

    fn circle(&mut self, x: f64, y: f64, r: f64, color: Color, alpha: f64) {
        let s = self.scale;
        self.raster.fill_circle(x * s, y * s, r * s, color, alpha);
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, color: Color) {
        let s = self.scale;
        self.raster.fill_ellipse(x * s, y * s, rx * s, ry * s, color, 1.0);
    }

    fn ring(&mut self, x: f64, y: f64, r: f64, width: f64, color: Color, alpha: f64) {
        let s = self.scale;
        // keep hairlines visible on small textures
        let width = (width * s).max(1.0);
        self.raster.stroke_circle(x * s, y * s, r * s, width, color, alpha);
    }
}

fn paint_earth(p: &mut Painter, palette: &Palette, rng: &mut Rng) {
    const CONTINENTS: [(f64, f64, f64, f64); 5] = [
        (200.0, 300.0, 300.0, 200.0),
        (600.0, 200.0, 250.0, 180.0),
        (100.0, 600.0, 200.0, 150.0),
        (700.0, 500.0, 180.0, 200.0),
        (400.0, 700.0, 220.0, 120.0),
    ];

    p.fill(palette.get(0));
    let land = palette.get(1);
    for (cx, cy, w, h) in CONTINENTS {
        p.ellipse(cx, cy, w / 2.0, h / 2.0, land);
        for _ in 0..20 {
            let x = cx + (rng.next_f64() - 0.5) * w;
            let y = cy + (rng.next_f64() - 0.5) * h;
            p.circle(x, y, rng.range(5.0, 20.0), MOUNTAIN_BROWN, 1.0);
        }
    }

    for _ in 0..100 {
        let alpha = rng.range(0.1, 0.4);
        let (x, y) = (rng.next_f64() * DESIGN_SPACE, rng.next_f64() * DESIGN_SPACE);
        p.circle(x, y, rng.range(5.0, 25.0), Color::WHITE, alpha);
    }
}

fn paint_gas(p: &mut Painter, palette: &Palette, rng: &mut Rng) {
    let s = p.scale;
    let half = DESIGN_SPACE / 2.0 * s;
    p.raster.fill_radial_gradient(
        half,
        half,
        half,
        &[
            (0.0, palette.get(0)),
            (0.3, palette.get(1)),
            (0.6, palette.get(2)),
            (1.0, palette.get(3)),
        ],
    );

    for y in (0..DESIGN_SPACE as u32).step_by(8) {
        let band = if y % 64 < 32 { palette.get(1) } else { palette.get(2) };
        p.raster.set_global_alpha(0.7 + (y as f64 * 0.1).sin() * 0.3);
        p.rect(0.0, y as f64, DESIGN_SPACE, 8.0, band, 1.0);
    }
    p.raster.set_global_alpha(1.0);

    for _ in 0..15 {
        let (x, y) = (rng.next_f64() * DESIGN_SPACE, rng.next_f64() * DESIGN_SPACE);
        let radius = rng.range(20.0, 70.0);
        p.circle(x, y, radius, Color::BLACK, rng.range(0.2, 0.6));
        p.ring(x, y, radius * 0.8, 2.0, Color::WHITE, rng.next_f64() * 0.3);
    }
}

fn paint_rocky(p: &mut Painter, palette: &Palette, rng: &mut Rng) {
    p.fill(palette.get(0));

    for _ in 0..200 {
        let (x, y) = (rng.next_f64() * DESIGN_SPACE, rng.next_f64() * DESIGN_SPACE);
        let radius = rng.range(10.0, 40.0);
        let color = palette.get(rng.index(palette.len()));
        p.circle(x, y, radius, color, rng.range(0.6, 1.0));
    }

    for _ in 0..50 {
        let (x, y) = (rng.next_f64() * DESIGN_SPACE, rng.next_f64() * DESIGN_SPACE);
        let radius = rng.range(5.0, 30.0);
        p.circle(x, y, radius, Color::BLACK, 0.6);
        p.circle(x + radius * 0.2, y + radius * 0.2, radius * 0.6, Color::BLACK, 0.8);
    }
}

fn paint_moon(p: &mut Painter, palette: &Palette, rng: &mut Rng) {
    p.fill(palette.get(0));

    let highland = palette.get(1);
    for _ in 0..300 {
        let (x, y) = (rng.next_f64() * DESIGN_SPACE, rng.next_f64() * DESIGN_SPACE);
        let radius = rng.range(5.0, 25.0);
        p.circle(x, y, radius, highland, rng.range(0.3, 0.8));
    }

    for _ in 0..80 {
        let (x, y) = (rng.next_f64() * DESIGN_SPACE, rng.next_f64() * DESIGN_SPACE);
        let radius = rng.range(10.0, 50.0);
        p.circle(x, y, radius, Color::BLACK, 0.4);
        p.ring(x, y, radius * 0.9, 2.0, Color::WHITE, 0.3);
        p.circle(x + radius * 0.3, y + radius * 0.3, radius * 0.5, Color::BLACK, 0.6);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(surface: SurfaceType, colors: &[&str], size: u32) -> TextureKey {
        TextureKey {
            surface,
            palette: Palette::from_hex(colors),
            size,
        }
    }

    #[test]
    fn repeated_key_returns_same_texture() {
        let mut cache = TextureCache::new();
        let mut rng = Rng::new(1);
        let a = cache.get_or_create(key(SurfaceType::Rocky, &["#8C7853", "#6B5D47"], 32), &mut rng);
        let b = cache.get_or_create(key(SurfaceType::Rocky, &["#8C7853", "#6B5D47"], 32), &mut rng);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn different_key_returns_distinct_texture() {
        let mut cache = TextureCache::new();
        let mut rng = Rng::new(1);
        let a = cache.get_or_create(key(SurfaceType::Gas, &["#C88B3A", "#D4A574"], 32), &mut rng);
        let b = cache.get_or_create(key(SurfaceType::Gas, &["#C88B3A", "#D4A574"], 16), &mut rng);
        let c = cache.get_or_create(key(SurfaceType::Rocky, &["#C88B3A", "#D4A574"], 32), &mut rng);
        assert!(!Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn short_palette_reuses_last_entry() {
        let palette = Palette::from_hex(&["#112233", "#445566"]);
        assert_eq!(palette.get(3), Color::rgb(0x44, 0x55, 0x66));
        assert_eq!(Palette::from_hex(&[]).get(0), Color::GRAY);
    }

    #[test]
    fn solid_fills_with_primary() {
        let mut rng = Rng::new(3);
        let raster = synthesize(SurfaceType::Solid, &Palette::from_hex(&["#FDB813"]), 16, &mut rng);
        assert_eq!(raster.pixel(0, 0), [0xfd, 0xb8, 0x13, 255]);
        assert_eq!(raster.pixel(15, 15), [0xfd, 0xb8, 0x13, 255]);
    }

    #[test]
    fn every_surface_is_opaque_even_with_one_color() {
        let palette = Palette::from_hex(&["#4A90E2"]);
        for surface in [SurfaceType::Earth, SurfaceType::Gas, SurfaceType::Rocky, SurfaceType::Moon] {
            let raster = synthesize(surface, &palette, 32, &mut Rng::new(9));
            assert_eq!(raster.width(), 32);
            assert!(raster.data().chunks(4).all(|px| px[3] == 255), "{} has holes", surface.name());
        }
    }

    #[test]
    fn scattered_features_depend_on_rng() {
        let palette = Palette::from_hex(&["#C0C0C0", "#A0A0A0"]);
        let a = synthesize(SurfaceType::Moon, &palette, 64, &mut Rng::new(1));
        let b = synthesize(SurfaceType::Moon, &palette, 64, &mut Rng::new(2));
        let c = synthesize(SurfaceType::Moon, &palette, 64, &mut Rng::new(1));
        assert_ne!(a.data(), b.data());
        assert_eq!(a.data(), c.data());
    }
}
