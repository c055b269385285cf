use glam::{DMat3, DVec3};
use web_sys::CanvasRenderingContext2d;

use crate::rng::Rng;
use crate::scene::Camera;

pub const STAR_COUNT: usize = 600;
const STAR_SPREAD: f64 = 100.0;
const STAR_SIZE: f64 = 0.08;
const STAR_OPACITY: f64 = 0.9;

/// Tints in draw order. Each star indexes one of these.
const TINTS: [&str; 4] = [
    "rgb(255,255,255)", // white
    "rgb(204,230,255)", // blue
    "rgb(255,255,204)", // yellow
    "rgb(255,204,204)", // red
];

struct Star {
    pos: DVec3,
    tint: usize,
}

pub struct Starfield {
    stars: Vec<Star>,
}

fn pick_tint(roll: f64) -> usize {
    if roll < 0.7 {
        0
    } else if roll < 0.85 {
        1
    } else if roll < 0.95 {
        2
    } else {
        3
    }
}

impl Starfield {
    /// Random point cloud in a cube centred on the origin. Generated once per
    /// mount, then only rotated.
    pub fn generate(count: usize, rng: &mut Rng) -> Self {
        let stars = (0..count)
            .map(|_| {
                let mut axis = || (rng.next_f64() - 0.5) * STAR_SPREAD;
                let pos = DVec3::new(axis(), axis(), axis());
                Star { pos, tint: pick_tint(rng.next_f64()) }
            })
            .collect();
        Starfield { stars }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[cfg(test)]
    pub fn tint_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for star in &self.stars {
            counts[star.tint] += 1;
        }
        counts
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d, camera: &Camera, yaw: f64) {
        let spin = DMat3::from_rotation_y(yaw);

        ctx.set_global_alpha(STAR_OPACITY);
        // Batch by tint: one fill style per group.
        for (tint, color) in TINTS.iter().enumerate() {
            ctx.set_fill_style_str(color);
            for star in self.stars.iter().filter(|s| s.tint == tint) {
                if let Some(p) = camera.project(spin * star.pos) {
                    let size = (camera.scale_at(p.depth) * STAR_SIZE).max(0.6);
                    ctx.fill_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
                }
            }
        }
        ctx.set_global_alpha(1.0);
    }
}
