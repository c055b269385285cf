//! Scroll spy, side navigation, mobile header and drawer.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::canvas::viewport_size;
use crate::config::PROFILE;
use crate::constants::*;
use crate::scroll::{window_scroll_y, BrowserFrames, FrameThrottle, WindowListener};
use crate::state::PageState;

/// First section whose vertical span contains `line`. `spans` are
/// `(id, top, bottom)` in viewport coordinates, in page order.
pub fn active_section<'a>(spans: &[(&'a str, f64, f64)], line: f64) -> Option<&'a str> {
    spans
        .iter()
        .find(|(_, top, bottom)| *top <= line && *bottom >= line)
        .map(|(id, _, _)| *id)
}

pub fn mobile_header_visible(scroll_y: f64) -> bool {
    scroll_y > MOBILE_HEADER_SCROLL
}

pub fn side_nav_visible(viewport_width: f64, scroll_y: f64) -> bool {
    viewport_width >= DESKTOP_MIN_WIDTH || scroll_y > MOBILE_HEADER_SCROLL
}

fn section_spans() -> Vec<(&'static str, f64, f64)> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    SECTION_IDS
        .iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some((*id, rect.top(), rect.bottom()))
        })
        .collect()
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("no section #{}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Lock or release page scrolling behind the drawer.
fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "unset" });
    }
}

/// Keeps the page flags in sync with scroll position and viewport width.
/// Recomputes at most once per frame.
pub struct ScrollSpy {
    _throttle: Rc<FrameThrottle<BrowserFrames>>,
    _scroll: WindowListener,
    _resize: Option<WindowListener>,
}

impl ScrollSpy {
    pub fn attach(state: PageState) -> Option<Self> {
        let ticking = Rc::new(Cell::new(false));
        let flag = ticking.clone();
        let update = move || {
            let y = window_scroll_y();
            if let Some(id) = active_section(&section_spans(), SCROLL_SPY_LINE) {
                if state.active_section.get_untracked() != id {
                    state.active_section.set(id);
                }
            }
            state.show_mobile_header.set(mobile_header_visible(y));
            let width = viewport_size().map(|(w, _)| w).unwrap_or(0.0);
            state.show_side_nav.set(side_nav_visible(width, y));
        };
        update();

        let throttle = Rc::new(FrameThrottle::new(
            BrowserFrames::new(move || {
                update();
                flag.set(false);
            }),
            ticking,
        ));
        let on_scroll = throttle.clone();
        let scroll = WindowListener::passive("scroll", move || on_scroll.request())?;
        let on_resize = throttle.clone();
        let resize = WindowListener::passive("resize", move || on_resize.request());

        Some(ScrollSpy {
            _throttle: throttle,
            _scroll: scroll,
            _resize: resize,
        })
    }
}

const SIDE_NAV_ITEMS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("services", "Services"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const DRAWER_ITEMS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn SideNav(state: PageState) -> impl IntoView {
    view! {
        <Show when=move || state.show_side_nav.get()>
            <nav class="side-nav" aria-label="Sections">
                {SIDE_NAV_ITEMS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <button
                                class=move || {
                                    if state.active_section.get() == id { "nav-dot active" } else { "nav-dot" }
                                }
                                title=label
                                aria-label=label
                                on:click=move |_| scroll_to_section(id)
                            >
                                {label.chars().next().map(String::from).unwrap_or_default()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}

#[component]
pub fn MobileHeader(state: PageState) -> impl IntoView {
    view! {
        <header class=move || {
            if state.show_mobile_header.get() { "mobile-header shown" } else { "mobile-header" }
        }>
            <span class="brand">{PROFILE.short_name}</span>
            <button class="menu-btn" aria-label="Open menu" on:click=move |_| state.menu_open.set(true)>
                "☰"
            </button>
        </header>
    }
}

#[component]
pub fn MobileDrawer(state: PageState) -> impl IntoView {
    Effect::new(move |_| {
        set_body_scroll_locked(state.menu_open.get());
    });
    on_cleanup(|| set_body_scroll_locked(false));

    let close = move || state.menu_open.set(false);
    let open_class = move |base: &'static str| {
        move || if state.menu_open.get() { format!("{} open", base) } else { base.to_string() }
    };

    view! {
        <div class=open_class("drawer-backdrop") on:click=move |_| close()></div>
        <aside class=open_class("drawer") aria-hidden=move || (!state.menu_open.get()).to_string()>
            <div class="drawer-head">
                <span class="brand">{format!("{}.DEV", PROFILE.short_name)}</span>
                <button class="drawer-close" aria-label="Close menu" on:click=move |_| close()>"✕"</button>
            </div>
            <nav class="drawer-items">
                {DRAWER_ITEMS
                    .iter()
                    .map(|&(id, label)| {
                        let on_click = move |_: leptos::ev::MouseEvent| {
                            close();
                            // Let the drawer slide out before scrolling.
                            gloo_timers::callback::Timeout::new(DRAWER_SCROLL_DELAY_MS, move || {
                                scroll_to_section(id)
                            })
                            .forget();
                        };
                        view! {
                            <button
                                class=move || {
                                    if state.active_section.get() == id { "drawer-item active" } else { "drawer-item" }
                                }
                                on:click=on_click
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="drawer-foot">
                <span class="status-dot"></span>
                <span>"Available for opportunities"</span>
                <p>"Full Stack Developer from Nepal"</p>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spy_picks_first_section_spanning_line() {
        let spans = [
            ("home", -900.0, -100.0),
            ("about", -100.0, 400.0),
            ("skills", 400.0, 1200.0),
        ];
        assert_eq!(active_section(&spans, 150.0), Some("about"));
    }

    #[test]
    fn spy_boundaries_are_inclusive() {
        let spans = [("home", 0.0, 150.0), ("about", 150.0, 600.0)];
        assert_eq!(active_section(&spans, 150.0), Some("home"));
    }

    #[test]
    fn spy_keeps_previous_when_nothing_spans() {
        let spans = [("home", 200.0, 400.0)];
        assert_eq!(active_section(&spans, 150.0), None);
    }

    #[test]
    fn header_appears_past_threshold() {
        assert!(!mobile_header_visible(600.0));
        assert!(mobile_header_visible(601.0));
    }

    #[test]
    fn side_nav_always_on_desktop() {
        assert!(side_nav_visible(1024.0, 0.0));
        assert!(!side_nav_visible(800.0, 100.0));
        assert!(side_nav_visible(800.0, 700.0));
    }
}
