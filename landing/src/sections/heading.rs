use gii_page::classes::{Entrance, entrance_class};
use leptos::prelude::*;

/// Centered title + lead paragraph that fades in with its section.
#[component]
pub fn SectionHeading(
    visible: Memo<bool>,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let class = move || {
        format!(
            "text-center mb-12 sm:mb-16 transition-all duration-1000 {}",
            entrance_class(visible.get(), Entrance::FadeInUp)
        )
    };

    view! {
        <div class=class>
            <h2 class="text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold text-foreground mb-4 sm:mb-6 text-balance">
                {title}
            </h2>
            <p class="text-lg sm:text-xl text-muted-foreground max-w-4xl mx-auto text-pretty leading-relaxed">
                {description}
            </p>
        </div>
    }
}
