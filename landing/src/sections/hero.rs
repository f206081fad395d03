use gii_page::classes::{Entrance, entrance_class, parallax_style};
use gii_page::config::ParallaxConfig;
use gii_page::content::IconKind;
use gii_page::{ParallaxLayer, SectionId};
use leptos::prelude::*;

use super::icons::Icon;
use crate::page::PageHandle;

#[component]
pub fn Hero(page: PageHandle, parallax: ParallaxConfig, texture: String) -> impl IntoView {
    let visible = page.visible(SectionId::Home);
    let offset = move |layer: ParallaxLayer| page.state.with(|s| s.parallax_offset(layer, &parallax));

    let gradient_style = move || parallax_style(offset(ParallaxLayer::Gradient));
    let texture_style = move || {
        format!(
            "background-image: url('{}'); {}",
            texture,
            parallax_style(offset(ParallaxLayer::Texture))
        )
    };
    let content_class = move || {
        format!(
            "transition-all duration-1000 {}",
            entrance_class(visible.get(), Entrance::FadeInUp)
        )
    };

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div
                class="absolute inset-0 bg-gradient-to-br from-primary/20 via-secondary/10 to-primary/30 parallax-bg"
                style=gradient_style
            ></div>
            <div class="absolute inset-0 opacity-5 parallax-bg" style=texture_style></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10">
                <div class=content_class>
                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold text-foreground mb-4 sm:mb-6 text-balance leading-tight">
                        "Innovating for a "
                        <span class="bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent animate-glow">
                            "Sustainable Future"
                        </span>
                    </h1>
                    <p class="text-lg sm:text-xl md:text-2xl text-muted-foreground mb-6 sm:mb-8 max-w-4xl mx-auto text-pretty leading-relaxed px-4">
                        "Leading environmental research and breakthrough technologies to create a greener, more sustainable world "
                        "for future generations."
                    </p>
                    <button
                        class="gradient-button btn-enhanced animate-shimmer"
                        on:click=move |_| page.navigate(SectionId::About)
                    >
                        "Discover Our Mission"
                    </button>
                </div>
            </div>

            <div class="absolute bottom-6 sm:bottom-8 left-1/2 transform -translate-x-1/2 animate-float">
                <div class="flex flex-col items-center space-y-2">
                    <Icon kind=IconKind::ChevronDown class="w-6 h-6 sm:w-8 sm:h-8 text-primary animate-bounce" />
                    <span class="text-xs text-muted-foreground hidden sm:block">"Scroll to explore"</span>
                </div>
            </div>
        </section>
    }
}
