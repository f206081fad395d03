//! Inline SVG line icons (Lucide, 24×24 stroke set).

use gii_page::content::IconKind;
use leptos::prelude::*;

/// Renders one of the page icons as inline SVG.
#[component]
pub fn Icon(
    kind: IconKind,
    /// Additional CSS class names (size, color)
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {paths(kind).iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

fn paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Leaf => ICON_LEAF,
        IconKind::Zap => ICON_ZAP,
        IconKind::Sprout => ICON_SPROUT,
        IconKind::Recycle => ICON_RECYCLE,
        IconKind::Droplets => ICON_DROPLETS,
        IconKind::ChevronDown => ICON_CHEVRON_DOWN,
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

const ICON_LEAF: &[&str] = &[
    "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
    "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
];

const ICON_ZAP: &[&str] = &[
    "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
];

const ICON_SPROUT: &[&str] = &[
    "M7 20h10",
    "M10 20c5.5-2.5.8-6.4 3-10",
    "M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z",
    "M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z",
];

const ICON_RECYCLE: &[&str] = &[
    "M7 19H4.815a1.83 1.83 0 0 1-1.57-.881 1.785 1.785 0 0 1-.004-1.784L7.196 9.5",
    "M11 19h8.203a1.83 1.83 0 0 0 1.556-.89 1.784 1.784 0 0 0 0-1.775l-1.226-2.12",
    "m14 16-3 3 3 3",
    "M8.293 13.596 7.196 9.5 3.1 10.598",
    "m9.344 5.811 1.093-1.892A1.83 1.83 0 0 1 11.985 3a1.784 1.784 0 0 1 1.546.888l3.943 6.843",
    "m13.378 9.633 4.096 1.098 1.097-4.096",
];

const ICON_DROPLETS: &[&str] = &[
    "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
    "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97",
];

const ICON_CHEVRON_DOWN: &[&str] = &["m6 9 6 6 6-6"];
