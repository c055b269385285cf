mod app;
mod bodies;
mod canvas;
mod config;
mod constants;
mod contact;
mod content;
mod email;
mod error;
mod frame_loop;
mod lazy;
mod manifest;
mod nav;
mod orbit;
mod parallax;
mod pdf;
mod raster;
mod resume;
mod rng;
mod scene;
mod scroll;
mod sections;
mod starfield;
mod state;
mod texture;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    manifest::inject();
    leptos::mount::mount_to_body(app::App);
}
