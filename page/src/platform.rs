//! Capabilities the page needs from its rendering environment.
//!
//! The browser implementation lives in the landing crate; tests use a
//! recording mock. Every subscription is an RAII [`Subscription`]: dropping
//! it removes the listener or disconnects the observer.

use crate::config::ObserverConfig;
use crate::error::PlatformError;
use crate::section::SectionId;

/// One entry of a viewport intersection batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEvent {
    /// `id` attribute of the observed element
    pub target_id: String,
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`
    pub ratio: f64,
}

impl IntersectionEvent {
    pub fn entering(target_id: impl Into<String>, ratio: f64) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

pub type ScrollHandler = Box<dyn FnMut(f64)>;
pub type IntersectionHandler = Box<dyn FnMut(Vec<IntersectionEvent>)>;

/// Scroll, viewport and navigation primitives of an interactive environment.
pub trait Platform {
    /// Call `handler` with the vertical page offset on every scroll event.
    fn on_scroll(&self, handler: ScrollHandler) -> Result<Subscription, PlatformError>;

    /// Observe every rendered `section[id]` and forward intersection batches.
    fn observe_sections(
        &self,
        options: &ObserverConfig,
        handler: IntersectionHandler,
    ) -> Result<Subscription, PlatformError>;

    /// Smoothly scroll the section's element into view.
    /// Returns `false` when no element carries that id.
    fn scroll_into_view(&self, section: SectionId) -> bool;
}

/// A live listener or observer; released exactly once, on drop at the latest.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    name: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(name: &'static str, release: impl FnOnce() + 'static) -> Self {
        Self {
            name,
            release: Some(Box::new(release)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!(subscription = self.name, "released");
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .field("live", &self.release.is_some())
            .finish()
    }
}

/// Everything the content view holds while mounted.
#[derive(Debug, Default)]
pub struct Subscriptions {
    pub scroll: Option<Subscription>,
    pub visibility: Option<Subscription>,
}

impl Subscriptions {
    pub fn is_empty(&self) -> bool {
        self.scroll.is_none() && self.visibility.is_none()
    }

    /// Release both handles.
    pub fn release(self) {
        drop(self);
    }
}

/// Acquire the scroll and visibility subscriptions for a freshly mounted view.
///
/// With no platform (non-interactive rendering) nothing is acquired. A
/// subscription that fails is logged and skipped; the page renders anyway.
pub fn subscribe<P: Platform + ?Sized>(
    platform: Option<&P>,
    observer: &ObserverConfig,
    on_scroll: ScrollHandler,
    on_intersect: IntersectionHandler,
) -> Subscriptions {
    let Some(platform) = platform else {
        tracing::debug!("no interactive environment, skipping subscriptions");
        return Subscriptions::default();
    };

    let scroll = platform
        .on_scroll(on_scroll)
        .inspect_err(|e| tracing::warn!("scroll tracking disabled: {e}"))
        .ok();
    let visibility = platform
        .observe_sections(observer, on_intersect)
        .inspect_err(|e| tracing::warn!("visibility tracking disabled: {e}"))
        .ok();

    tracing::debug!(
        scroll = scroll.is_some(),
        visibility = visibility.is_some(),
        "subscriptions acquired"
    );
    Subscriptions { scroll, visibility }
}
