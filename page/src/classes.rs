//! Class and inline-style strings derived from [`PageState`](crate::PageState).
//!
//! Animation names match the keyframes in the landing stylesheet.

/// Hidden state for every entrance animation before its section is seen.
pub const HIDDEN: &str = "opacity-0";

/// Entrance animations used by the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    FadeInUp,
    ScaleIn,
    SlideInLeft,
}

impl Entrance {
    pub fn class(self) -> &'static str {
        match self {
            Entrance::FadeInUp => "animate-fade-in-up",
            Entrance::ScaleIn => "animate-scale-in",
            Entrance::SlideInLeft => "animate-slide-in-left",
        }
    }
}

pub fn entrance_class(visible: bool, entrance: Entrance) -> &'static str {
    if visible { entrance.class() } else { HIDDEN }
}

/// Per-card delay class, 1-based.
pub fn stagger_class(index: usize) -> String {
    format!("stagger-{}", index + 1)
}

pub fn parallax_style(offset: f64) -> String {
    format!("transform: translateY({offset}px)")
}

pub fn drawer_class(menu_open: bool) -> &'static str {
    if menu_open {
        "max-h-64 opacity-100"
    } else {
        "max-h-0 opacity-0"
    }
}

/// The three bars of the burger button; open turns them into a cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurgerBar {
    Top,
    Middle,
    Bottom,
}

impl BurgerBar {
    pub const ALL: [BurgerBar; 3] = [BurgerBar::Top, BurgerBar::Middle, BurgerBar::Bottom];

    /// Resting position.
    pub fn base_class(self) -> &'static str {
        match self {
            BurgerBar::Top => "top-1",
            BurgerBar::Middle => "top-3",
            BurgerBar::Bottom => "top-5",
        }
    }

    pub fn state_class(self, menu_open: bool) -> &'static str {
        if !menu_open {
            return "";
        }
        match self {
            BurgerBar::Top => "rotate-45 top-3",
            BurgerBar::Middle => "opacity-0",
            BurgerBar::Bottom => "-rotate-45 top-3",
        }
    }
}

pub fn drawer_item_class(menu_open: bool) -> &'static str {
    if menu_open { Entrance::SlideInLeft.class() } else { "" }
}

pub fn drawer_item_style(index: usize) -> String {
    format!("animation-delay: {}s", index as f64 * 0.1)
}
