use gii_page::SiteConfig;
use leptos::prelude::*;

use crate::page::ContentView;

/// Shows a placeholder until the page runs on the client, then mounts the
/// interactive content. Effects never run outside the browser, so nothing
/// interactive is rendered anywhere else.
#[component]
pub fn PageShell(config: SiteConfig) -> impl IntoView {
    let (ready, set_ready) = signal(false);
    Effect::new(move |_| set_ready.set(true));

    view! {
        <Show when=move || ready.get() fallback=|| view! { <Loading /> }>
            <ContentView config=config.clone() />
        </Show>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">"Loading..."</div>
    }
}
