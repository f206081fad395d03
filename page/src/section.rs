//! Navigable page sections.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownSection;

/// One of the four anchored blocks of the page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    About,
    Services,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page and in the nav.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// Element id / anchor key.
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }

    /// Capitalized nav label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in [`SectionId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_parse_back() {
        for id in SectionId::ALL {
            assert_eq!(id.key().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "pricing".parse::<SectionId>(),
            Err(UnknownSection("pricing".into()))
        );
        // keys are case sensitive, like element ids
        assert!("Home".parse::<SectionId>().is_err());
    }

    #[test]
    fn order_matches_nav() {
        let labels: Vec<_> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "About", "Services", "Contact"]);
        assert_eq!(SectionId::Services.index(), 2);
    }
}
