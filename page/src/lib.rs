//! # gii-page
//!
//! Page model for the Green Innovations Institute landing page.
//!
//! Everything here is plain Rust with no DOM access, so it can be tested on
//! the host. The `gii-landing` crate wraps [`PageState`] in a Leptos signal
//! and implements [`Platform`] on top of `web-sys`.
//!
//! ## Modules
//!
//! - [`section`] - the four anchored sections
//! - [`state`] - visibility map, scroll offset, menu flag
//! - [`classes`] - animation classes and inline styles derived from state
//! - [`platform`] - scroll/viewport capabilities and their lifecycle
//! - [`content`] - static card copy
//! - [`contact`] - contact form model and submission seam
//! - [`config`] - `site.toml`
//!
//! ## Example
//!
//! ```rust
//! use gii_page::{IntersectionEvent, PageState, SectionId};
//! use gii_page::classes::{entrance_class, Entrance};
//!
//! let mut state = PageState::default();
//! state.record_intersections(&[IntersectionEvent::entering("home", 0.3)]);
//! assert!(state.is_visible(SectionId::Home));
//! assert_eq!(entrance_class(true, Entrance::FadeInUp), "animate-fade-in-up");
//! ```

pub mod classes;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod platform;
pub mod section;
pub mod state;

pub use config::SiteConfig;
pub use contact::{ContactForm, ContactSubmitter, InertSubmitter};
pub use error::{ConfigError, ContactError, PlatformError, UnknownSection};
pub use platform::{IntersectionEvent, Platform, Subscription, Subscriptions, subscribe};
pub use section::SectionId;
pub use state::{PageState, ParallaxLayer, VisibilityMap};
