//! Static page copy: feature and service cards.

/// Line icons used by the cards, hero and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Leaf,
    Zap,
    Sprout,
    Recycle,
    Droplets,
    ChevronDown,
}

/// A card in the about or services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

pub const ABOUT_FEATURES: [Card; 3] = [
    Card {
        title: "Environmental Research",
        description: "Advanced studies in climate science, biodiversity, and ecosystem restoration using state-of-the-art technology and methodologies.",
        icon: IconKind::Leaf,
    },
    Card {
        title: "Innovation Labs",
        description: "Collaborative spaces where scientists and engineers develop breakthrough technologies for renewable energy and sustainable materials.",
        icon: IconKind::Zap,
    },
    Card {
        title: "Global Partnerships",
        description: "Strategic alliances with universities, governments, and organizations worldwide to scale environmental solutions globally.",
        icon: IconKind::Sprout,
    },
];

pub const SERVICES: [Card; 4] = [
    Card {
        title: "Renewable Energy",
        description: "Solar, wind, and innovative clean energy solutions for sustainable power generation.",
        icon: IconKind::Zap,
    },
    Card {
        title: "Waste Management",
        description: "Advanced recycling technologies and circular economy solutions for zero-waste initiatives.",
        icon: IconKind::Recycle,
    },
    Card {
        title: "Sustainable Agriculture",
        description: "Precision farming techniques and organic solutions for food security and soil health.",
        icon: IconKind::Sprout,
    },
    Card {
        title: "Water Conservation",
        description: "Smart water management systems and purification technologies for clean water access.",
        icon: IconKind::Droplets,
    },
];
