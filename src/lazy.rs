//! Reveal-on-scroll sections and pointer-tilted cards.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::constants::{CARD_MAX_TILT_DEG, LAZY_ROOT_MARGIN, LAZY_THRESHOLD};

/// Observer that fires `on_visible` once, the first time `target` intersects,
/// then disconnects. Disconnects on drop as well.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn observe(target: &Element, mut on_visible: impl FnMut() + 'static) -> Option<Self> {
        let mut fired = false;
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|e| e.is_intersecting());
            if hit && !fired {
                fired = true;
                observer.disconnect();
                on_visible();
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(LAZY_THRESHOLD));
        init.set_root_margin(LAZY_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| log::warn!("IntersectionObserver unavailable: {:?}", e))
            .ok()?;
        observer.observe(target);
        Some(RevealObserver { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[component]
pub fn LazySection(#[prop(optional)] class: &'static str, children: ChildrenFn) -> impl IntoView {
    let visible = RwSignal::new(false);
    let node = NodeRef::<Div>::new();
    let guard: SendWrapper<Rc<RefCell<Option<RevealObserver>>>> = SendWrapper::new(Rc::new(RefCell::new(None)));

    let guard_mount = guard.clone();
    Effect::new(move |_| {
        let Some(el) = node.get() else { return };
        if guard_mount.borrow().is_some() || visible.get_untracked() {
            return;
        }
        let observer = RevealObserver::observe(&el, move || visible.set(true));
        if observer.is_none() {
            // No observer support: show immediately.
            visible.set(true);
        }
        *guard_mount.borrow_mut() = observer;
    });

    on_cleanup(move || {
        guard.borrow_mut().take();
    });

    view! {
        <div
            node_ref=node
            class=move || format!("{} {}", class, if visible.get() { "fade-in" } else { "pending" })
        >
            <Show
                when=move || visible.get()
                fallback=|| view! { <div class="lazy-placeholder"><div class="spinner"></div></div> }
            >
                {children()}
            </Show>
        </div>
    }
}

/// Card rotation in degrees for a pointer at `(x, y)`, each in [-0.5, 0.5]
/// relative to the card centre. Returns `(rotate_x, rotate_y)`.
pub fn card_tilt(x: f64, y: f64) -> (f64, f64) {
    let x = x.clamp(-0.5, 0.5);
    let y = y.clamp(-0.5, 0.5);
    let scale = CARD_MAX_TILT_DEG * 2.0;
    (-y * scale, x * scale)
}

#[component]
pub fn Card3D(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let tilt = RwSignal::new((0.0_f64, 0.0_f64));
    let card = NodeRef::<Div>::new();

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(el) = card.get_untracked() else { return };
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f64 - rect.left()) / rect.width() - 0.5;
        let y = (ev.client_y() as f64 - rect.top()) / rect.height() - 0.5;
        tilt.set(card_tilt(x, y));
    };

    view! {
        <div class=format!("card3d {}", class)>
            <div
                node_ref=card
                class="card3d-inner"
                style=move || {
                    let (rx, ry) = tilt.get();
                    format!("transform: rotateX({:.2}deg) rotateY({:.2}deg)", rx, ry)
                }
                on:mousemove=on_move
                on:mouseleave=move |_| tilt.set((0.0, 0.0))
            >
                <div class="card3d-lift">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(card_tilt(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn corners_hit_max_tilt() {
        assert_eq!(card_tilt(-0.5, -0.5), (17.5, -17.5));
        assert_eq!(card_tilt(0.5, 0.5), (-17.5, 17.5));
    }

    #[test]
    fn outside_card_is_clamped() {
        assert_eq!(card_tilt(2.0, -3.0), (17.5, 17.5));
    }
}
