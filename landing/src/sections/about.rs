use gii_page::SectionId;
use gii_page::classes::{Entrance, entrance_class, stagger_class};
use gii_page::content::{ABOUT_FEATURES, Card};
use leptos::prelude::*;

use super::heading::SectionHeading;
use super::icons::Icon;
use crate::page::PageHandle;

#[component]
pub fn About(page: PageHandle) -> impl IntoView {
    let visible = page.visible(SectionId::About);

    view! {
        <section id="about" class="py-16 sm:py-20 lg:py-24 bg-card">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    visible=visible
                    title="Pioneering Environmental Solutions"
                    description="Our institute combines cutting-edge research with practical innovation to address the world's most pressing environmental challenges."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                    {ABOUT_FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! { <FeatureCard card=*card index=index visible=visible /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(card: Card, index: usize, visible: Memo<bool>) -> impl IntoView {
    let class = move || {
        format!(
            "glass-card hover:shadow-xl transition-all duration-500 transform hover:-translate-y-2 group {} {}",
            entrance_class(visible.get(), Entrance::ScaleIn),
            stagger_class(index)
        )
    };

    view! {
        <article class=class>
            <div class="p-6 sm:p-8 text-center">
                <div class="mb-4 sm:mb-6 flex justify-center">
                    <div class="p-3 sm:p-4 bg-gradient-to-br from-primary/10 to-secondary/10 rounded-full group-hover:from-primary/20 group-hover:to-secondary/20 transition-all duration-300 group-hover:scale-110">
                        <Icon kind=card.icon class="w-8 h-8 text-primary" />
                    </div>
                </div>
                <h3 class="text-xl sm:text-2xl font-bold text-card-foreground mb-3 sm:mb-4">{card.title}</h3>
                <p class="text-muted-foreground leading-relaxed text-pretty text-sm sm:text-base">
                    {card.description}
                </p>
            </div>
        </article>
    }
}
