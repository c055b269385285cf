//! Celestial body descriptors for the background scene.
//!
//! Positions are scene units, rotation speed is radians per display tick,
//! orbit speed is radians per second. Nothing here changes after mount.

use glam::DVec3;

use crate::texture::{Palette, SurfaceType};

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: &'static str,
    pub position: DVec3,
    pub radius: f64,
    pub palette: Palette,
    pub rotation_speed: f64,
    pub orbit_speed: f64,
    pub scroll_speed: f64,
    pub tilt: f64,
    pub rings: bool,
    pub atmosphere: bool,
    pub surface: SurfaceType,
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_POSITION: DVec3 = DVec3::new(-12.0, 0.0, -8.0);
pub const SUN_RADIUS: f64 = 1.5;
pub const SUN_CORONA_RADIUS: f64 = 1.8;
pub const SUN_COLOR: &str = "#FDB813";
pub const SUN_CORONA_COLOR: &str = "#FFD700";

// ── Moon ─────────────────────────────────────────────────────────────

pub const MOON_RADIUS: f64 = 0.25;
pub const MOON_ORBIT_RADIUS: f64 = 1.5;
pub const MOON_ORBIT_SPEED: f64 = 0.5;
pub const MOON_ROTATION_SPEED: f64 = 0.01;
pub const MOON_PALETTE: [&str; 2] = ["#C0C0C0", "#A0A0A0"];

/// Wobble radius shared by all planets.
pub const PLANET_ORBIT_AMPLITUDE: f64 = 0.5;

pub const EARTH_POSITION: DVec3 = DVec3::new(0.0, 0.0, -3.0);

/// Atmosphere shells: (radius multiplier, color, opacity).
pub const ATMOSPHERE_SHELLS: [(f64, &str, f64); 2] = [(1.02, "#87CEEB", 0.15), (1.05, "#4A90E2", 0.10)];

/// Ring bands: (inner multiplier, outer multiplier, color, opacity).
pub const RING_BANDS: [(f64, f64, &str, f64); 2] = [(1.4, 1.8, "#D4A574", 0.8), (1.8, 2.2, "#C0A080", 0.6)];

/// Ring plane tilt towards the camera.
pub const RING_TILT: f64 = std::f64::consts::PI / 2.5;

#[allow(clippy::too_many_arguments)]
fn planet(
    name: &'static str,
    position: DVec3,
    radius: f64,
    colors: &[&str],
    rotation_speed: f64,
    orbit_speed: f64,
    scroll_speed: f64,
    tilt: f64,
    surface: SurfaceType,
) -> CelestialBody {
    CelestialBody {
        name,
        position,
        radius,
        palette: Palette::from_hex(colors),
        rotation_speed,
        orbit_speed,
        scroll_speed,
        tilt,
        rings: false,
        atmosphere: false,
        surface,
    }
}

pub fn planets() -> Vec<CelestialBody> {
    use SurfaceType::*;

    let earth = CelestialBody {
        atmosphere: true,
        ..planet("Earth", EARTH_POSITION, 0.8, &["#4A90E2", "#2E7D32", "#1565C0"], 0.01, 0.2, 0.3, 0.41, Earth)
    };
    let saturn = CelestialBody {
        rings: true,
        ..planet("Saturn", DVec3::new(-6.0, 3.0, -7.0), 1.2, &["#FAD5A5", "#E8C89A", "#F5DEB3"], 0.018, 0.06, 0.2, 0.47, Gas)
    };

    vec![
        planet("Mercury", DVec3::new(-8.0, 1.0, -5.0), 0.4, &["#8C7853", "#6B5D47", "#9A8A6F"], 0.004, 0.4, 0.5, 0.03, Rocky),
        planet("Venus", DVec3::new(-5.0, -2.0, -4.0), 0.7, &["#FFC649", "#E8B84D", "#FFD873"], 0.002, 0.3, 0.4, 0.05, Rocky),
        earth,
        planet("Mars", DVec3::new(4.0, 2.0, -3.0), 0.6, &["#E27B58", "#C1440E", "#D84315"], 0.009, 0.15, 0.35, 0.44, Rocky),
        planet("Jupiter", DVec3::new(7.0, -1.0, -6.0), 1.4, &["#C88B3A", "#D4A574", "#B87333", "#E6B87D"], 0.02, 0.08, 0.25, 0.05, Gas),
        saturn,
        planet("Uranus", DVec3::new(9.0, 1.0, -8.0), 0.9, &["#4FD0E7", "#5DD9ED", "#3FBFD9"], 0.012, 0.04, 0.15, 1.71, Gas),
        planet("Neptune", DVec3::new(-9.0, -2.0, -9.0), 0.85, &["#4166F5", "#2E4EC9", "#5A7FFF"], 0.011, 0.03, 0.1, 0.49, Gas),
    ]
}

pub fn moon() -> CelestialBody {
    CelestialBody {
        name: "Moon",
        position: EARTH_POSITION,
        radius: MOON_RADIUS,
        palette: Palette::from_hex(&MOON_PALETTE),
        rotation_speed: MOON_ROTATION_SPEED,
        orbit_speed: MOON_ORBIT_SPEED,
        scroll_speed: 0.3,
        tilt: 0.0,
        rings: false,
        atmosphere: false,
        surface: SurfaceType::Moon,
    }
}
