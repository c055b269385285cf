//! Decorative 2D background: gradient, glow, grid, blurred blobs and a few
//! floating particles, each translated at its own rate as the page scrolls.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::constants::*;
use crate::rng::Rng;
use crate::scroll::{self, ScrollDriver};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Percent of the viewport.
    pub left: f64,
    pub top: f64,
    /// Seconds.
    pub delay: f64,
    pub duration: f64,
}

pub fn generate_particles(count: usize, rng: &mut Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: rng.range(0.0, 100.0),
            top: rng.range(0.0, 100.0),
            delay: rng.range(0.0, 5.0),
            duration: rng.range(15.0, 25.0),
        })
        .collect()
}

thread_local! {
    static PARTICLES: OnceCell<Rc<[Particle]>> = const { OnceCell::new() };
}

/// Particles for this page load. Drawn on first use, reused on every remount.
pub fn session_particles() -> Rc<[Particle]> {
    PARTICLES.with(|cell| {
        cell.get_or_init(|| generate_particles(PARTICLE_COUNT, &mut Rng::from_entropy()).into())
            .clone()
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerOffsets {
    pub radial: (f64, f64),
    pub grid: (f64, f64),
    pub blobs: [(f64, f64); 3],
}

fn scaled((mx, my): (f64, f64), scroll: f64) -> (f64, f64) {
    (mx * scroll, my * scroll)
}

pub fn layer_offsets(scroll: f64) -> LayerOffsets {
    LayerOffsets {
        radial: scaled(RADIAL_PARALLAX, scroll),
        grid: scaled(GRID_PARALLAX, scroll),
        blobs: BLOB_PARALLAX.map(|m| scaled(m, scroll)),
    }
}

/// Vertical offset of the `index`th particle.
pub fn particle_offset(index: usize, scroll: f64) -> f64 {
    scroll * (PARTICLE_BASE_PARALLAX + PARTICLE_PARALLAX_STEP * index as f64)
}

pub fn translate3d((x, y): (f64, f64)) -> String {
    format!("translate3d({}px, {}px, 0)", x, y)
}

fn set_transform(node: NodeRef<Div>, offset: (f64, f64)) {
    if let Some(el) = node.get_untracked() {
        let _ = web_sys::HtmlElement::style(&el).set_property("transform", &translate3d(offset));
    }
}

#[component]
pub fn Background() -> impl IntoView {
    let radial = NodeRef::<Div>::new();
    let grid = NodeRef::<Div>::new();
    let blobs = [NodeRef::<Div>::new(), NodeRef::<Div>::new(), NodeRef::<Div>::new()];
    let particles = session_particles();
    let particle_refs: Vec<NodeRef<Div>> = particles.iter().map(|_| NodeRef::new()).collect();

    let driver: SendWrapper<Rc<RefCell<Option<ScrollDriver>>>> = SendWrapper::new(Rc::new(RefCell::new(None)));
    let driver_mount = driver.clone();
    let refs_mount = particle_refs.clone();
    Effect::new(move |_| {
        if driver_mount.borrow().is_some() {
            return;
        }
        let refs = refs_mount.clone();
        let attached = ScrollDriver::attach(scroll::page_scroll(), BACKGROUND_SCROLL_THRESHOLD, move |y| {
            let offsets = layer_offsets(y);
            set_transform(radial, offsets.radial);
            set_transform(grid, offsets.grid);
            for (node, offset) in blobs.iter().zip(offsets.blobs) {
                set_transform(*node, offset);
            }
            for (i, node) in refs.iter().enumerate() {
                set_transform(*node, (0.0, particle_offset(i, y)));
            }
        });
        if attached.is_none() {
            log::warn!("background parallax listener unavailable");
        }
        *driver_mount.borrow_mut() = attached;
    });

    on_cleanup(move || {
        driver.borrow_mut().take();
    });

    let particle_views = particles
        .iter()
        .zip(particle_refs)
        .map(|(p, node)| {
            let style = format!(
                "left: {:.3}%; top: {:.3}%; animation-delay: {:.3}s; animation-duration: {:.3}s; transform: translateZ(0)",
                p.left, p.top, p.delay, p.duration
            );
            view! { <div node_ref=node class="bg-particle" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="bg-layer" aria-hidden="true">
            <div class="bg-base"></div>
            <div node_ref=radial class="bg-radial"></div>
            <div node_ref=grid class="bg-grid"></div>
            <div node_ref=blobs[0] class="bg-blob bg-blob-1"></div>
            <div node_ref=blobs[1] class="bg-blob bg-blob-2"></div>
            <div node_ref=blobs[2] class="bg-blob bg-blob-3"></div>
            {particle_views}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_layer_multipliers() {
        let o = layer_offsets(100.0);
        assert_eq!(o.radial, (0.0, 30.0));
        assert_eq!(o.grid, (0.0, 50.0));
        assert!((o.blobs[0].0 - 20.0).abs() < 1e-9 && (o.blobs[0].1 - 40.0).abs() < 1e-9);
        assert!((o.blobs[1].0 + 30.0).abs() < 1e-9 && (o.blobs[1].1 + 20.0).abs() < 1e-9);
        assert!((o.blobs[2].0 + 25.0).abs() < 1e-9 && (o.blobs[2].1 - 35.0).abs() < 1e-9);
    }

    #[test]
    fn particles_drift_faster_by_index() {
        assert!((particle_offset(0, 100.0) - 10.0).abs() < 1e-9);
        assert!((particle_offset(5, 100.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn particles_stay_in_range() {
        let ps = generate_particles(PARTICLE_COUNT, &mut Rng::new(3));
        assert_eq!(ps.len(), 15);
        for p in ps {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((15.0..25.0).contains(&p.duration));
        }
    }

    #[test]
    fn transform_string() {
        assert_eq!(translate3d((-3.0, 1.5)), "translate3d(-3px, 1.5px, 0)");
    }
}
