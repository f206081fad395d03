use gii_page::SectionId;
use gii_page::classes::{Entrance, entrance_class, stagger_class};
use gii_page::content::{Card, SERVICES};
use leptos::prelude::*;

use super::heading::SectionHeading;
use super::icons::Icon;
use crate::page::PageHandle;

#[component]
pub fn Services(page: PageHandle) -> impl IntoView {
    let visible = page.visible(SectionId::Services);

    view! {
        <section id="services" class="py-16 sm:py-20 lg:py-24 bg-background">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    visible=visible
                    title="Our Green Solutions"
                    description="Comprehensive environmental services designed to create lasting positive impact across multiple sectors."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4 sm:gap-6">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ServiceCard card=*card index=index visible=visible /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(card: Card, index: usize, visible: Memo<bool>) -> impl IntoView {
    let class = move || {
        format!(
            "glass-card hover:shadow-2xl transition-all duration-500 transform hover:scale-105 group {} {}",
            entrance_class(visible.get(), Entrance::SlideInLeft),
            stagger_class(index)
        )
    };

    view! {
        <article class=class>
            <div class="p-4 sm:p-6 text-center">
                <div class="mb-3 sm:mb-4 flex justify-center">
                    <div class="p-2 sm:p-3 bg-gradient-to-br from-secondary/20 to-primary/20 rounded-full group-hover:from-secondary/30 group-hover:to-primary/30 transition-all duration-300 group-hover:rotate-12">
                        <Icon kind=card.icon class="w-8 sm:w-10 h-8 sm:h-10 text-secondary" />
                    </div>
                </div>
                <h3 class="text-lg sm:text-xl font-bold text-card-foreground mb-2 sm:mb-3">{card.title}</h3>
                <p class="text-muted-foreground text-sm leading-relaxed text-pretty">{card.description}</p>
            </div>
        </article>
    }
}
