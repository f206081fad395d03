//! The interactive page: owns the reactive state and its subscriptions.

use gii_page::{IntersectionEvent, PageState, SectionId, SiteConfig};
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::platform::BrowserPlatform;
use crate::sections::{About, Contact, Footer, Hero, Nav, Services};

/// Reactive page state plus the environment it runs in. `Copy`, so every
/// section can take it by value.
#[derive(Debug, Clone, Copy)]
pub struct PageHandle {
    pub state: RwSignal<PageState>,
    pub platform: Option<BrowserPlatform>,
}

impl PageHandle {
    pub fn new(platform: Option<BrowserPlatform>) -> Self {
        Self {
            state: RwSignal::new(PageState::default()),
            platform,
        }
    }

    /// Smooth-scroll to `section` and close the mobile menu.
    pub fn navigate(self, section: SectionId) {
        tracing::debug!(%section, "navigate");
        // Scroll outside the signal update; the DOM may call back into the page.
        if PageState::request_scroll(section, self.platform.as_ref()) {
            self.state.update(PageState::close_menu);
        }
    }

    pub fn toggle_menu(self) {
        self.state.update(PageState::toggle_menu);
    }

    /// Re-runs dependents only when the section's visibility flips.
    pub fn visible(self, section: SectionId) -> Memo<bool> {
        Memo::new(move |_| self.state.with(|s| s.is_visible(section)))
    }

    pub fn menu_open(self) -> Memo<bool> {
        Memo::new(move |_| self.state.with(|s| s.menu_open))
    }
}

#[component]
pub fn ContentView(config: SiteConfig) -> impl IntoView {
    let page = PageHandle::new(BrowserPlatform::detect());
    let observer = config.observer.clone();

    Effect::new(move |_| {
        let state = page.state;
        let subscriptions = gii_page::subscribe(
            page.platform.as_ref(),
            &observer,
            Box::new(move |y: f64| state.update(|s| s.record_scroll(y))),
            Box::new(move |events: Vec<IntersectionEvent>| {
                state.update(|s| {
                    s.record_intersections(&events);
                });
            }),
        );
        if subscriptions.visibility.is_none() {
            state.update(PageState::reveal_all);
        }
        let subscriptions = SendWrapper::new(subscriptions);
        on_cleanup(move || subscriptions.take().release());
    });

    view! {
        <div class="min-h-screen bg-background">
            <Nav page=page brand=config.brand.clone() />
            <Hero page=page parallax=config.parallax texture=config.brand.texture.clone() />
            <About page=page />
            <Services page=page />
            <Contact page=page />
            <Footer brand=config.brand.clone() />
        </div>
    }
}
