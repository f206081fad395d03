//! Mutable state of the mounted content view.

use std::collections::BTreeSet;

use crate::config::ParallaxConfig;
use crate::platform::{IntersectionEvent, Platform};
use crate::section::SectionId;

/// Sections that have entered the viewport at least once. Never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    seen: BTreeSet<SectionId>,
}

impl VisibilityMap {
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.seen.contains(&section)
    }

    /// Returns `true` if the section was not visible before.
    pub fn mark(&mut self, section: SectionId) -> bool {
        self.seen.insert(section)
    }

    /// Fold one observer batch in; returns the sections it revealed.
    ///
    /// Only intersecting entries count. Leaving the viewport does not hide a
    /// section again, and ids outside the known set are ignored.
    pub fn apply(&mut self, events: &[IntersectionEvent]) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for event in events.iter().filter(|e| e.is_intersecting) {
            match event.target_id.parse::<SectionId>() {
                Ok(section) => {
                    if self.mark(section) {
                        revealed.push(section);
                    }
                }
                Err(e) => tracing::trace!("ignoring intersection: {e}"),
            }
        }
        revealed
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.seen.iter().copied()
    }
}

/// Hero background layers, nearest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxLayer {
    Gradient,
    Texture,
}

impl ParallaxLayer {
    pub fn rate(self, config: &ParallaxConfig) -> f64 {
        match self {
            ParallaxLayer::Gradient => config.gradient_rate,
            ParallaxLayer::Texture => config.texture_rate,
        }
    }

    /// Vertical displacement in px for a page scroll offset.
    pub fn offset(self, scroll_y: f64, config: &ParallaxConfig) -> f64 {
        scroll_y * self.rate(config)
    }
}

/// Visibility, scroll offset and mobile menu flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub visibility: VisibilityMap,
    pub scroll_y: f64,
    pub menu_open: bool,
}

impl PageState {
    pub fn record_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub fn record_intersections(&mut self, events: &[IntersectionEvent]) -> Vec<SectionId> {
        let revealed = self.visibility.apply(events);
        if !revealed.is_empty() {
            tracing::debug!(?revealed, "sections entered viewport");
        }
        revealed
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visibility.is_visible(section)
    }

    pub fn parallax_offset(&self, layer: ParallaxLayer, config: &ParallaxConfig) -> f64 {
        layer.offset(self.scroll_y, config)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll to the section named `key` and close the mobile menu.
    ///
    /// An unknown key, or no interactive environment, leaves the state
    /// untouched. A known key closes the menu even if the element is not in
    /// the document. Returns whether anything happened.
    pub fn scroll_to_section<P: Platform + ?Sized>(
        &mut self,
        key: &str,
        platform: Option<&P>,
    ) -> bool {
        match key.parse::<SectionId>() {
            Ok(section) => self.navigate(section, platform),
            Err(e) => {
                tracing::debug!("navigation skipped: {e}");
                false
            }
        }
    }

    pub fn navigate<P: Platform + ?Sized>(
        &mut self,
        section: SectionId,
        platform: Option<&P>,
    ) -> bool {
        let scrolled = Self::request_scroll(section, platform);
        if scrolled {
            self.close_menu();
        }
        scrolled
    }

    /// The environment half of [`navigate`](Self::navigate): starts the
    /// smooth scroll without touching any state. Callers that keep the state
    /// behind a lock run this first and close the menu afterwards when it
    /// returns `true`.
    pub fn request_scroll<P: Platform + ?Sized>(section: SectionId, platform: Option<&P>) -> bool {
        let Some(platform) = platform else {
            return false;
        };
        if !platform.scroll_into_view(section) {
            tracing::debug!(%section, "no element to scroll to");
        }
        true
    }

    /// Show every section at once. Used when viewport tracking is
    /// unavailable so no content stays hidden.
    pub fn reveal_all(&mut self) {
        for section in SectionId::ALL {
            self.visibility.mark(section);
        }
    }
}
