use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::contact::ContactSection;
use crate::nav::{MobileDrawer, MobileHeader, ScrollSpy, SideNav};
use crate::parallax::Background;
use crate::scene::SceneView;
use crate::sections::{About, ExperienceSection, Hero, Projects, Services, Sidebar, Skills};
use crate::state::PageState;

#[component]
pub fn App() -> impl IntoView {
    let state = PageState::new();

    let spy: SendWrapper<Rc<RefCell<Option<ScrollSpy>>>> = SendWrapper::new(Rc::new(RefCell::new(None)));
    let spy_mount = spy.clone();
    Effect::new(move |_| {
        if spy_mount.borrow().is_none() {
            *spy_mount.borrow_mut() = ScrollSpy::attach(state);
        }
    });
    on_cleanup(move || {
        spy.borrow_mut().take();
    });

    view! {
        <div class="page">
            <Background />
            <SceneView />
            <div class="content" itemscope itemtype="https://schema.org/Person">
                <Sidebar />
                <SideNav state=state />
                <MobileHeader state=state />
                <MobileDrawer state=state />
                <main class="main">
                    <Hero state=state />
                    <About />
                    <Skills />
                    <ExperienceSection />
                    <Services />
                    <Projects />
                    <ContactSection />
                </main>
            </div>
        </div>
    }
}
