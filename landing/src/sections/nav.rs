use gii_page::SectionId;
use gii_page::classes::{BurgerBar, drawer_class, drawer_item_class, drawer_item_style};
use gii_page::config::BrandConfig;
use leptos::prelude::*;

use crate::page::PageHandle;

#[component]
pub fn Nav(page: PageHandle, brand: BrandConfig) -> impl IntoView {
    let menu_open = page.menu_open();
    let logo_alt = format!("{} logo", brand.name);

    let desktop_links = SectionId::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class="text-foreground hover:text-primary transition-all duration-300 capitalize font-medium relative group"
                    on:click=move |_| page.navigate(section)
                >
                    {section.label()}
                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-primary transition-all duration-300 group-hover:w-full"></span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let burger_bars = BurgerBar::ALL
        .into_iter()
        .map(|bar| {
            let class = move || {
                format!(
                    "absolute {} left-0 w-6 h-0.5 bg-foreground transition-all duration-300 {}",
                    bar.base_class(),
                    bar.state_class(menu_open.get())
                )
            };
            view! { <span class=class></span> }
        })
        .collect::<Vec<_>>();

    let drawer_links = SectionId::ALL
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            let class = move || {
                format!(
                    "block w-full text-left text-foreground hover:text-primary hover:bg-primary/5 transition-all duration-300 capitalize font-medium py-3 px-2 rounded-lg {}",
                    drawer_item_class(menu_open.get())
                )
            };
            view! {
                <button
                    class=class
                    style=drawer_item_style(index)
                    on:click=move |_| page.navigate(section)
                >
                    {section.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 glass-card border-b border-border/20">
            <nav class="container mx-auto px-4 py-3 flex justify-between items-center">
                <div class="flex items-center space-x-3">
                    <img
                        src=brand.logo.clone()
                        alt=logo_alt
                        width=brand.logo_width.to_string()
                        height=brand.logo_height.to_string()
                        class="h-8 w-auto object-contain"
                    />
                    <span class="text-lg sm:text-xl font-bold text-foreground">{brand.name.clone()}</span>
                </div>

                // Desktop navigation, always visible from md up
                <div class="hidden md:flex items-center space-x-6 lg:space-x-8">{desktop_links}</div>

                <button
                    class="md:hidden p-2 rounded-lg hover:bg-primary/10 transition-colors duration-300"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| page.toggle_menu()
                >
                    <div class="relative w-6 h-6">{burger_bars}</div>
                </button>
            </nav>

            <div class=move || {
                format!(
                    "md:hidden overflow-hidden transition-all duration-300 {}",
                    drawer_class(menu_open.get())
                )
            }>
                <div class="glass-card border-t border-border/20">
                    <div class="container mx-auto px-4 py-4 space-y-2">{drawer_links}</div>
                </div>
            </div>
        </header>
    }
}
