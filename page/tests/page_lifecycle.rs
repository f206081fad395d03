//! Mount/unmount of the content view against a recording platform.

use std::cell::RefCell;
use std::rc::Rc;

use gii_page::classes::{Entrance, drawer_class, entrance_class};
use gii_page::config::ObserverConfig;
use gii_page::platform::{IntersectionHandler, ScrollHandler};
use gii_page::{
    IntersectionEvent, PageState, ParallaxLayer, Platform, PlatformError, SectionId, SiteConfig,
    Subscription, subscribe,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct MockPlatform {
    scroll: Rc<RefCell<Option<ScrollHandler>>>,
    sections: Rc<RefCell<Option<IntersectionHandler>>>,
    released: Rc<RefCell<Vec<&'static str>>>,
    observed_with: RefCell<Option<ObserverConfig>>,
    scrolled_to: RefCell<Vec<SectionId>>,
    rendered: Vec<SectionId>,
    observer_unsupported: bool,
    /// Scroll position reported synchronously while scrolling into view.
    scroll_on_navigate: Option<f64>,
}

impl MockPlatform {
    fn with_all_sections() -> Self {
        Self {
            rendered: SectionId::ALL.to_vec(),
            ..Default::default()
        }
    }

    fn emit_scroll(&self, y: f64) {
        if let Some(handler) = self.scroll.borrow_mut().as_mut() {
            handler(y);
        }
    }

    fn emit_intersections(&self, events: Vec<IntersectionEvent>) {
        if let Some(handler) = self.sections.borrow_mut().as_mut() {
            handler(events);
        }
    }

    fn released(&self) -> Vec<&'static str> {
        self.released.borrow().clone()
    }
}

impl Platform for MockPlatform {
    fn on_scroll(&self, handler: ScrollHandler) -> Result<Subscription, PlatformError> {
        *self.scroll.borrow_mut() = Some(handler);
        let slot = self.scroll.clone();
        let released = self.released.clone();
        Ok(Subscription::new("scroll", move || {
            slot.borrow_mut().take();
            released.borrow_mut().push("scroll");
        }))
    }

    fn observe_sections(
        &self,
        options: &ObserverConfig,
        handler: IntersectionHandler,
    ) -> Result<Subscription, PlatformError> {
        if self.observer_unsupported {
            return Err(PlatformError::Js {
                call: "IntersectionObserver",
                message: "not supported".into(),
            });
        }
        *self.observed_with.borrow_mut() = Some(options.clone());
        *self.sections.borrow_mut() = Some(handler);
        let slot = self.sections.clone();
        let released = self.released.clone();
        Ok(Subscription::new("visibility", move || {
            slot.borrow_mut().take();
            released.borrow_mut().push("visibility");
        }))
    }

    fn scroll_into_view(&self, section: SectionId) -> bool {
        self.scrolled_to.borrow_mut().push(section);
        if let Some(y) = self.scroll_on_navigate {
            self.emit_scroll(y);
        }
        self.rendered.contains(&section)
    }
}

fn mount(platform: Option<&MockPlatform>, state: &Rc<RefCell<PageState>>) -> gii_page::Subscriptions {
    let config = SiteConfig::default();
    let on_scroll = {
        let state = state.clone();
        Box::new(move |y| state.borrow_mut().record_scroll(y)) as ScrollHandler
    };
    let on_intersect = {
        let state = state.clone();
        Box::new(move |events: Vec<IntersectionEvent>| {
            state.borrow_mut().record_intersections(&events);
        }) as IntersectionHandler
    };
    subscribe(platform, &config.observer, on_scroll, on_intersect)
}

#[test]
fn mount_wires_scroll_and_visibility() {
    let platform = MockPlatform::with_all_sections();
    let state = Rc::new(RefCell::new(PageState::default()));
    let subs = mount(Some(&platform), &state);

    assert!(subs.scroll.is_some());
    assert!(subs.visibility.is_some());
    assert_eq!(
        platform.observed_with.borrow().as_ref(),
        Some(&ObserverConfig::default())
    );

    platform.emit_scroll(300.0);
    let parallax = SiteConfig::default().parallax;
    {
        let state = state.borrow();
        assert_eq!(state.scroll_y, 300.0);
        assert_eq!(state.parallax_offset(ParallaxLayer::Gradient, &parallax), 150.0);
        assert_eq!(state.parallax_offset(ParallaxLayer::Texture, &parallax), 90.0);
    }

    assert!(state.borrow().visibility.is_empty());
    platform.emit_intersections(vec![IntersectionEvent::entering("home", 0.1)]);
    assert_eq!(
        entrance_class(state.borrow().is_visible(SectionId::Home), Entrance::FadeInUp),
        "animate-fade-in-up"
    );
    assert_eq!(
        entrance_class(state.borrow().is_visible(SectionId::About), Entrance::FadeInUp),
        "opacity-0"
    );
}

#[test]
fn visibility_survives_leaving_viewport() {
    let platform = MockPlatform::with_all_sections();
    let state = Rc::new(RefCell::new(PageState::default()));
    let _subs = mount(Some(&platform), &state);

    platform.emit_intersections(vec![
        IntersectionEvent::entering("services", 0.3),
        IntersectionEvent::entering("contact", 0.1),
    ]);
    platform.emit_intersections(vec![
        IntersectionEvent::leaving("services"),
        IntersectionEvent::leaving("contact"),
    ]);

    let state = state.borrow();
    assert!(state.is_visible(SectionId::Services));
    assert!(state.is_visible(SectionId::Contact));
    assert_eq!(state.visibility.len(), 2);
}

#[test]
fn unmount_releases_both_subscriptions() {
    let platform = MockPlatform::with_all_sections();
    let state = Rc::new(RefCell::new(PageState::default()));
    let subs = mount(Some(&platform), &state);

    subs.release();
    let mut released = platform.released();
    released.sort_unstable();
    assert_eq!(released, vec!["scroll", "visibility"]);

    // events after unmount reach nobody
    platform.emit_scroll(999.0);
    assert_eq!(state.borrow().scroll_y, 0.0);
}

#[test]
fn no_environment_acquires_nothing() {
    let state = Rc::new(RefCell::new(PageState::default()));
    let subs = mount(None, &state);
    assert!(subs.is_empty());
}

#[test]
fn failed_observer_keeps_scroll_tracking() {
    let platform = MockPlatform {
        observer_unsupported: true,
        ..MockPlatform::with_all_sections()
    };
    let state = Rc::new(RefCell::new(PageState::default()));
    let subs = mount(Some(&platform), &state);

    assert!(subs.scroll.is_some());
    assert!(subs.visibility.is_none());
    platform.emit_scroll(10.0);
    assert_eq!(state.borrow().scroll_y, 10.0);
}

#[test]
fn failed_observer_reveals_every_section() {
    let platform = MockPlatform {
        observer_unsupported: true,
        ..MockPlatform::with_all_sections()
    };
    let state = Rc::new(RefCell::new(PageState::default()));
    let subs = mount(Some(&platform), &state);
    if subs.visibility.is_none() {
        state.borrow_mut().reveal_all();
    }

    let state = state.borrow();
    for section in SectionId::ALL {
        assert_eq!(
            entrance_class(state.is_visible(section), Entrance::FadeInUp),
            "animate-fade-in-up"
        );
    }
}

#[test]
fn navigation_scrolls_before_touching_state() {
    let platform = MockPlatform {
        scroll_on_navigate: Some(320.0),
        ..MockPlatform::with_all_sections()
    };
    let state = Rc::new(RefCell::new(PageState {
        menu_open: true,
        ..Default::default()
    }));
    let _subs = mount(Some(&platform), &state);

    // The scroll handler borrows the state while the platform scrolls.
    if PageState::request_scroll(SectionId::Services, Some(&platform)) {
        state.borrow_mut().close_menu();
    }

    let state = state.borrow();
    assert_eq!(state.scroll_y, 320.0);
    assert!(!state.menu_open);
    assert_eq!(*platform.scrolled_to.borrow(), vec![SectionId::Services]);
}

#[test]
fn navigation_closes_menu_from_any_state() {
    let platform = MockPlatform::with_all_sections();
    for section in SectionId::ALL {
        for open in [false, true] {
            let mut state = PageState {
                menu_open: open,
                ..Default::default()
            };
            assert!(state.scroll_to_section(section.key(), Some(&platform)));
            assert!(!state.menu_open);
            assert_eq!(drawer_class(state.menu_open), "max-h-0 opacity-0");
        }
    }
    assert_eq!(platform.scrolled_to.borrow().len(), 8);
}

#[test]
fn navigation_to_missing_element_still_closes_menu() {
    let platform = MockPlatform::default();
    let mut state = PageState {
        menu_open: true,
        ..Default::default()
    };
    assert!(state.scroll_to_section("contact", Some(&platform)));
    assert!(!state.menu_open);
}

#[test]
fn unknown_section_changes_nothing() {
    let platform = MockPlatform::with_all_sections();
    let mut state = PageState {
        menu_open: true,
        scroll_y: 42.0,
        ..Default::default()
    };
    state.visibility.mark(SectionId::About);
    let before = state.clone();

    assert!(!state.scroll_to_section("careers", Some(&platform)));
    assert!(!state.scroll_to_section("", Some(&platform)));
    assert_eq!(state, before);
    assert!(platform.scrolled_to.borrow().is_empty());
}

#[test]
fn navigation_without_environment_is_a_no_op() {
    let mut state = PageState {
        menu_open: true,
        ..Default::default()
    };
    assert!(!state.scroll_to_section::<MockPlatform>("home", None));
    assert!(state.menu_open);
}
