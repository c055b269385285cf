//! Decorative 3D solar system drawn onto a fixed, click-through canvas.
//!
//! The scene is composed once at mount from the descriptors in `bodies`,
//! advanced every display refresh, and projected with a simple perspective
//! camera onto a 2D context. Bodies are painted back to front.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::{DMat4, DVec2, DVec3};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::bodies::{self, CelestialBody};
use crate::canvas;
use crate::constants::*;
use crate::frame_loop::{FrameLoop, FrameTime};
use crate::orbit;
use crate::raster::Color;
use crate::rng::Rng;
use crate::scroll::{self, ScrollDriver, WindowListener};
use crate::starfield::{Starfield, STAR_COUNT};
use crate::texture::{self, Texture, TextureKey};

const NEAR_PLANE: f64 = 0.1;

// ── Camera ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

pub struct Camera {
    view: DMat4,
    focal: f64,
    center: DVec2,
}

impl Camera {
    /// Camera on a horizontal circle of `distance` around the origin, looking
    /// at it. `angle` 0 puts the eye on +Z.
    pub fn orbiting(angle: f64, distance: f64, fov_deg: f64, width: f64, height: f64) -> Self {
        let eye = DVec3::new(distance * angle.sin(), 0.0, distance * angle.cos());
        Camera {
            view: DMat4::look_at_rh(eye, DVec3::ZERO, DVec3::Y),
            focal: (height / 2.0) / (fov_deg.to_radians() / 2.0).tan(),
            center: DVec2::new(width / 2.0, height / 2.0),
        }
    }

    pub fn project(&self, world: DVec3) -> Option<Projected> {
        let p = self.view.transform_point3(world);
        let depth = -p.z;
        if depth <= NEAR_PLANE {
            return None;
        }
        Some(Projected {
            x: self.center.x + self.focal * p.x / depth,
            y: self.center.y - self.focal * p.y / depth,
            depth,
        })
    }

    /// Screen pixels per world unit at `depth`.
    pub fn scale_at(&self, depth: f64) -> f64 {
        self.focal / depth
    }
}

// ── Scene graph ──────────────────────────────────────────────────────

pub struct BodyNode {
    pub body: CelestialBody,
    texture: Rc<Texture>,
    pub spin: f64,
    pub position: DVec3,
}

impl BodyNode {
    fn new(body: CelestialBody, texture: Rc<Texture>) -> Self {
        let position = body.position;
        BodyNode { body, texture, spin: 0.0, position }
    }
}

pub struct Scene {
    pub planets: Vec<BodyNode>,
    pub moon: BodyNode,
    stars: Starfield,
    scroll: f64,
}

impl Scene {
    /// Build the static scene. `resolve` supplies one texture per body.
    pub fn compose(mut resolve: impl FnMut(TextureKey) -> Rc<Texture>, rng: &mut Rng) -> Self {
        let mut node = |body: CelestialBody| {
            let key = TextureKey {
                surface: body.surface,
                palette: body.palette.clone(),
                size: TEXTURE_SIZE,
            };
            BodyNode::new(body, resolve(key))
        };
        let planets = bodies::planets().into_iter().map(&mut node).collect();
        let moon = node(bodies::moon());
        Scene {
            planets,
            moon,
            stars: Starfield::generate(STAR_COUNT, rng),
            scroll: 0.0,
        }
    }

    /// One display tick: spin by the fixed per-tick increment, orbit from
    /// elapsed seconds.
    pub fn advance(&mut self, elapsed: f64) {
        for node in &mut self.planets {
            node.spin = orbit::wrap_angle(node.spin + node.body.rotation_speed);
            node.position = orbit::orbital_offset(
                node.body.position,
                elapsed,
                node.body.orbit_speed,
                bodies::PLANET_ORBIT_AMPLITUDE,
            );
        }
        let moon = &mut self.moon;
        moon.spin = orbit::wrap_angle(moon.spin + moon.body.rotation_speed);
        moon.position = orbit::moon_offset(moon.body.position, elapsed, moon.body.orbit_speed, bodies::MOON_ORBIT_RADIUS);
    }

    pub fn set_scroll(&mut self, offset: f64) {
        self.scroll = offset;
    }

    /// World position including the per-body scroll parallax lift.
    pub fn displayed_position(&self, node: &BodyNode) -> DVec3 {
        node.position + DVec3::Y * (self.scroll * node.body.scroll_speed * SCENE_SCROLL_FACTOR)
    }

    fn nodes(&self) -> impl Iterator<Item = &BodyNode> {
        self.planets.iter().chain(std::iter::once(&self.moon))
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64, frame: FrameTime) {
        ctx.clear_rect(0.0, 0.0, width, height);

        let angle = orbit::auto_rotate_angle(frame.elapsed, CAMERA_AUTO_ROTATE_SPEED);
        let camera = Camera::orbiting(angle, CAMERA_DISTANCE, CAMERA_FOV_DEG, width, height);

        self.stars.render(ctx, &camera, orbit::starfield_yaw(js_sys::Date::now()));

        let sun = camera.project(bodies::SUN_POSITION);

        let mut draw_list: Vec<(f64, Option<&BodyNode>)> = self
            .nodes()
            .filter_map(|n| camera.project(self.displayed_position(n)).map(|p| (p.depth, Some(n))))
            .collect();
        if let Some(p) = sun {
            draw_list.push((p.depth, None));
        }
        // Far first
        draw_list.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, node) in draw_list {
            match node {
                Some(node) => {
                    if let Some(p) = camera.project(self.displayed_position(node)) {
                        draw_body(ctx, node, p, camera.scale_at(p.depth) * node.body.radius, sun);
                    }
                }
                None => {
                    if let Some(p) = sun {
                        draw_sun(ctx, p, camera.scale_at(p.depth));
                    }
                }
            }
        }
    }
}

fn draw_sun(ctx: &CanvasRenderingContext2d, p: Projected, scale: f64) {
    let r = bodies::SUN_RADIUS * scale;
    let corona = bodies::SUN_CORONA_RADIUS * scale * 2.2;
    let core = Color::from_hex(bodies::SUN_COLOR).unwrap_or(Color::WHITE);
    let halo = Color::from_hex(bodies::SUN_CORONA_COLOR).unwrap_or(core);

    if let Ok(glow) = ctx.create_radial_gradient(p.x, p.y, r * 0.8, p.x, p.y, corona) {
        let _ = glow.add_color_stop(0.0, &halo.to_css_alpha(0.3));
        let _ = glow.add_color_stop(1.0, "rgba(0,0,0,0)");
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.fill_rect(p.x - corona, p.y - corona, corona * 2.0, corona * 2.0);
    }

    ctx.save();
    ctx.set_shadow_color(&core.to_css());
    ctx.set_shadow_blur(r * 0.8);
    ctx.set_fill_style_str(&core.to_css());
    ctx.begin_path();
    let _ = ctx.arc(p.x, p.y, r, 0.0, TAU);
    ctx.fill();
    ctx.restore();
}

fn draw_ring_half(ctx: &CanvasRenderingContext2d, p: Projected, r: f64, tilt: f64, front: bool) {
    let squash = bodies::RING_TILT.cos().abs().max(0.15);
    let (start, end) = if front { (0.0, std::f64::consts::PI) } else { (std::f64::consts::PI, TAU) };
    for (inner, outer, color, opacity) in bodies::RING_BANDS {
        let mid = (inner + outer) / 2.0 * r;
        let color = Color::from_hex(color).unwrap_or(Color::WHITE);
        ctx.set_stroke_style_str(&color.to_css_alpha(opacity));
        ctx.set_line_width((outer - inner) * r * squash.max(0.5));
        ctx.begin_path();
        let _ = ctx.ellipse(p.x, p.y, mid, mid * squash, tilt, start, end);
        ctx.stroke();
    }
}

fn draw_body(ctx: &CanvasRenderingContext2d, node: &BodyNode, p: Projected, r: f64, sun: Option<Projected>) {
    if r < 0.5 {
        return;
    }
    let body = &node.body;

    if body.rings {
        draw_ring_half(ctx, p, r, body.tilt, false);
    }

    if body.atmosphere {
        for (scale, color, opacity) in bodies::ATMOSPHERE_SHELLS.iter().rev() {
            let color = Color::from_hex(color).unwrap_or(Color::WHITE);
            ctx.set_fill_style_str(&color.to_css_alpha(*opacity));
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, r * scale, 0.0, TAU);
            ctx.fill();
        }
    }

    ctx.save();
    ctx.begin_path();
    let _ = ctx.arc(p.x, p.y, r, 0.0, TAU);
    ctx.clip();

    match node.texture.canvas() {
        Some(tex) => {
            // Half the texture spans the disc; spin scrolls it horizontally.
            let span = r * 4.0;
            let offset = node.spin / TAU * span;
            let _ = ctx.translate(p.x, p.y);
            let _ = ctx.rotate(body.tilt);
            let mut x = -r - offset;
            while x > -r {
                x -= span;
            }
            while x < r {
                let _ = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(tex, x, -r * 1.1, span, r * 2.2);
                x += span;
            }
            ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).unwrap_or(());
        }
        None => {
            ctx.set_fill_style_str(&body.palette.primary().to_css());
            ctx.fill_rect(p.x - r, p.y - r, r * 2.0, r * 2.0);
        }
    }
    ctx.restore();

    // Terminator shading towards the sun.
    ctx.save();
    ctx.begin_path();
    let _ = ctx.arc(p.x, p.y, r, 0.0, TAU);
    ctx.clip();
    let dir = sun
        .map(|s| DVec2::new(s.x - p.x, s.y - p.y).normalize_or_zero())
        .unwrap_or(DVec2::new(-1.0, -0.3).normalize());
    let (hx, hy) = (p.x + dir.x * r * 0.45, p.y + dir.y * r * 0.45);
    if let Ok(shade) = ctx.create_radial_gradient(hx, hy, r * 0.1, p.x, p.y, r * 1.05) {
        let _ = shade.add_color_stop(0.0, "rgba(255,255,255,0.08)");
        let _ = shade.add_color_stop(0.6, "rgba(0,0,0,0.15)");
        let _ = shade.add_color_stop(1.0, "rgba(0,0,0,0.75)");
        ctx.set_fill_style_canvas_gradient(&shade);
        ctx.fill_rect(p.x - r, p.y - r, r * 2.0, r * 2.0);
    }
    ctx.restore();

    if body.rings {
        draw_ring_half(ctx, p, r, body.tilt, true);
    }
}

// ── Mounting ─────────────────────────────────────────────────────────

/// Everything the mounted scene keeps alive. Dropping it stops the loop and
/// removes the listeners.
struct SceneRuntime {
    _frames: FrameLoop,
    _scroll: Option<ScrollDriver>,
    _resize: Option<WindowListener>,
}

fn mount(canvas: HtmlCanvasElement) -> Option<SceneRuntime> {
    let ctx = canvas::context_2d(&canvas)?;

    let mut rng = Rng::from_entropy();
    let scene = Rc::new(RefCell::new(Scene::compose(texture::cached_texture, &mut rng)));
    {
        let scene = scene.borrow();
        let names: Vec<&str> = scene.planets.iter().chain([&scene.moon]).map(|n| n.body.name).collect();
        log::debug!("scene composed: {}", names.join(", "));
    }

    let size = Rc::new(Cell::new(canvas::resize_to_viewport(&canvas)?));
    let resize = {
        let canvas = canvas.clone();
        let size = size.clone();
        WindowListener::passive("resize", move || {
            if let Some(s) = canvas::resize_to_viewport(&canvas) {
                size.set(s);
            }
        })
    };

    let scroll_target = Rc::new(Cell::new(scroll::window_scroll_y()));
    let scroll = {
        let target = scroll_target.clone();
        ScrollDriver::attach(scroll::page_scroll(), SCENE_SCROLL_THRESHOLD, move |y| target.set(y))
    };

    let frames = FrameLoop::start(move |frame| {
        let (w, h, dpr) = size.get();
        let mut scene = scene.borrow_mut();
        scene.set_scroll(scroll_target.get());
        scene.advance(frame.elapsed);
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).unwrap_or(());
        scene.render(&ctx, w, h, frame);
    })?;

    Some(SceneRuntime {
        _frames: frames,
        _scroll: scroll,
        _resize: resize,
    })
}

#[component]
pub fn SceneView() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let runtime: SendWrapper<Rc<RefCell<Option<SceneRuntime>>>> = SendWrapper::new(Rc::new(RefCell::new(None)));

    let runtime_mount = runtime.clone();
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if runtime_mount.borrow().is_some() {
            return;
        }
        match mount(canvas) {
            Some(rt) => *runtime_mount.borrow_mut() = Some(rt),
            None => log::warn!("3D scene unavailable, leaving background blank"),
        }
    });

    on_cleanup(move || {
        if runtime.borrow_mut().take().is_some() {
            log::debug!("scene torn down");
        }
    });

    view! {
        <div class="scene-layer">
            <canvas node_ref=canvas_ref class="scene-canvas"></canvas>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureCache;

    fn test_scene() -> Scene {
        let mut cache = TextureCache::new();
        let mut tex_rng = Rng::new(2);
        Scene::compose(
            |mut key| {
                key.size = 8;
                cache.get_or_create(key, &mut tex_rng)
            },
            &mut Rng::new(1),
        )
    }

    #[test]
    fn composes_eight_planets_and_a_moon() {
        let scene = test_scene();
        assert_eq!(scene.planets.len(), 8);
        assert_eq!(scene.moon.body.name, "Moon");
        assert!(scene.planets.iter().any(|n| n.body.rings));
        assert!(scene.planets.iter().any(|n| n.body.atmosphere));
    }

    #[test]
    fn advance_spins_by_fixed_increment() {
        let mut scene = test_scene();
        scene.advance(0.0);
        scene.advance(0.016);
        let earth = scene.planets.iter().find(|n| n.body.name == "Earth").unwrap();
        assert!((earth.spin - 0.02).abs() < 1e-12);
    }

    #[test]
    fn advance_places_planets_on_their_orbit() {
        let mut scene = test_scene();
        let t = 3.7;
        scene.advance(t);
        for node in &scene.planets {
            let expected = orbit::orbital_offset(node.body.position, t, node.body.orbit_speed, 0.5);
            assert_eq!(node.position, expected);
        }
        let expected_moon = orbit::moon_offset(bodies::EARTH_POSITION, t, 0.5, 1.5);
        assert_eq!(scene.moon.position, expected_moon);
    }

    #[test]
    fn scroll_lifts_bodies_by_their_speed() {
        let mut scene = test_scene();
        scene.set_scroll(1000.0);
        let mercury = &scene.planets[0];
        let lifted = scene.displayed_position(mercury);
        let expected = 1000.0 * mercury.body.scroll_speed * SCENE_SCROLL_FACTOR;
        assert!((lifted.y - mercury.position.y - expected).abs() < 1e-9);
    }

    #[test]
    fn camera_projects_origin_to_center() {
        let camera = Camera::orbiting(0.0, 15.0, 60.0, 800.0, 600.0);
        let p = camera.project(DVec3::ZERO).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
        assert!((p.depth - 15.0).abs() < 1e-9);

        let right = camera.project(DVec3::new(1.0, 1.0, 0.0)).unwrap();
        assert!(right.x > 400.0);
        assert!(right.y < 300.0);
    }

    #[test]
    fn camera_culls_points_behind_eye() {
        let camera = Camera::orbiting(0.0, 15.0, 60.0, 800.0, 600.0);
        assert!(camera.project(DVec3::new(0.0, 0.0, 20.0)).is_none());
    }
}
