//! Software RGBA surface used for procedural textures.
//!
//! Drawing calls mirror the subset of the 2D canvas API the texture
//! painters need: solid fills, circles, ellipses, stroked rings and radial
//! gradients, all composited source-over with a global alpha.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Parse `#rrggbb` or `#rgb`. Anything else yields `None`.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Some(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    pub fn to_css_alpha(self, alpha: f64) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }

    fn lerp(self, other: Color, t: f64) -> Color {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    global_alpha: f64,
}

impl Raster {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Raster {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
            global_alpha: 1.0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    pub fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let a = (alpha * self.global_alpha).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        let dst_a = self.pixels[i + 3] as f64 / 255.0;
        let out_a = a + dst_a * (1.0 - a);
        let mix = |src: u8, dst: u8| {
            ((src as f64 * a + dst as f64 * dst_a * (1.0 - a)) / out_a).round() as u8
        };
        self.pixels[i] = mix(color.r, self.pixels[i]);
        self.pixels[i + 1] = mix(color.g, self.pixels[i + 1]);
        self.pixels[i + 2] = mix(color.b, self.pixels[i + 2]);
        self.pixels[i + 3] = (out_a * 255.0).round() as u8;
    }

    /// Pixel-index bounds covering `[lo, hi)` in surface coordinates.
    fn span(lo: f64, hi: f64, limit: u32) -> (i64, i64) {
        let start = lo.floor().max(0.0) as i64;
        let end = (hi.ceil() as i64).min(limit as i64);
        (start, end)
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color, alpha: f64) {
        let (x0, x1) = Self::span(x, x + w, self.width);
        let (y0, y1) = Self::span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color, alpha);
            }
        }
    }

    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color, alpha: f64) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(cx - rx, cx + rx, self.width);
        let (y0, y1) = Self::span(cy - ry, cy + ry, self.height);
        for py in y0..y1 {
            let dy = (py as f64 + 0.5 - cy) / ry;
            for px in x0..x1 {
                let dx = (px as f64 + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend(px, py, color, alpha);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Color, alpha: f64) {
        self.fill_ellipse(cx, cy, r, r, color, alpha);
    }

    /// Ring of `line_width` centred on radius `r`.
    pub fn stroke_circle(&mut self, cx: f64, cy: f64, r: f64, line_width: f64, color: Color, alpha: f64) {
        let half = line_width / 2.0;
        let (inner, outer) = ((r - half).max(0.0), r + half);
        let (x0, x1) = Self::span(cx - outer, cx + outer, self.width);
        let (y0, y1) = Self::span(cy - outer, cy + outer, self.height);
        for py in y0..y1 {
            let dy = py as f64 + 0.5 - cy;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - cx;
                let d = (dx * dx + dy * dy).sqrt();
                if d >= inner && d <= outer {
                    self.blend(px, py, color, alpha);
                }
            }
        }
    }

    /// Fill the whole surface with a radial gradient. `stops` are
    /// `(offset, color)` pairs with ascending offsets in `[0, 1]`.
    pub fn fill_radial_gradient(&mut self, cx: f64, cy: f64, radius: f64, stops: &[(f64, Color)]) {
        if stops.is_empty() || radius <= 0.0 {
            return;
        }
        for py in 0..self.height as i64 {
            for px in 0..self.width as i64 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let t = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
                self.blend(px, py, gradient_at(stops, t), 1.0);
            }
        }
    }
}

fn gradient_at(stops: &[(f64, Color)], t: f64) -> Color {
    let first = stops[0];
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.0 {
            let span = b.0 - a.0;
            let local = if span > 0.0 { (t - a.0) / span } else { 1.0 };
            return a.1.lerp(b.1, local);
        }
    }
    stops[stops.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Color::from_hex("#4A90E2"), Some(Color::rgb(0x4a, 0x90, 0xe2)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("4A90E2"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn opaque_fill_covers_rect_only() {
        let mut r = Raster::new(8, 8);
        r.fill_rect(2.0, 2.0, 4.0, 4.0, Color::rgb(10, 20, 30), 1.0);
        assert_eq!(r.pixel(3, 3), [10, 20, 30, 255]);
        assert_eq!(r.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(r.pixel(6, 6), [0, 0, 0, 0]);
    }

    #[test]
    fn half_alpha_blends_over_opaque() {
        let mut r = Raster::new(1, 1);
        r.fill_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK, 1.0);
        r.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE, 0.5);
        let [red, _, _, a] = r.pixel(0, 0);
        assert_eq!(a, 255);
        assert!((127..=128).contains(&red));
    }

    #[test]
    fn global_alpha_scales_paint() {
        let mut r = Raster::new(1, 1);
        r.fill_rect(0.0, 0.0, 1.0, 1.0, Color::BLACK, 1.0);
        r.set_global_alpha(0.0);
        r.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE, 1.0);
        assert_eq!(r.pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn circle_is_clipped_to_surface() {
        let mut r = Raster::new(4, 4);
        r.fill_circle(0.0, 0.0, 10.0, Color::WHITE, 1.0);
        assert_eq!(r.pixel(3, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn ring_leaves_center_untouched() {
        let mut r = Raster::new(21, 21);
        r.stroke_circle(10.5, 10.5, 8.0, 2.0, Color::WHITE, 1.0);
        assert_eq!(r.pixel(10, 10)[3], 0);
        assert_eq!(r.pixel(18, 10)[3], 255);
    }

    #[test]
    fn radial_gradient_interpolates_stops() {
        let mut r = Raster::new(101, 1);
        r.fill_radial_gradient(0.0, 0.5, 100.0, &[(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        assert!(r.pixel(0, 0)[0] < 5);
        assert!((120..=135).contains(&r.pixel(50, 0)[0]));
        assert_eq!(r.pixel(100, 0)[0], 255);
    }
}
