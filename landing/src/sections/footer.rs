use gii_page::config::BrandConfig;
use gii_page::content::IconKind;
use leptos::prelude::*;

use super::icons::Icon;

#[component]
pub fn Footer(brand: BrandConfig) -> impl IntoView {
    view! {
        <footer class="py-8 sm:py-12 bg-background border-t border-border">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="flex items-center justify-center space-x-2 mb-3 sm:mb-4">
                    <div class="w-6 h-6 bg-gradient-to-br from-primary to-secondary rounded-lg flex items-center justify-center animate-pulse-slow">
                        <Icon kind=IconKind::Leaf class="w-4 h-4 text-primary-foreground" />
                    </div>
                    <span class="text-lg font-bold text-foreground">{brand.name}</span>
                </div>
                <p class="text-muted-foreground text-sm sm:text-base">{brand.copyright}</p>
            </div>
        </footer>
    }
}
