use gii_page::SectionId;
use gii_page::classes::{Entrance, entrance_class};
use gii_page::contact::{ContactField, FieldKind};
use gii_page::{ContactForm, ContactSubmitter, InertSubmitter};
use leptos::ev;
use leptos::prelude::*;

use super::heading::SectionHeading;
use crate::page::PageHandle;

const CONTROL_CLASS: &str = "w-full bg-input border border-border rounded-md px-3 py-2 focus:border-primary focus:ring-primary/20 transition-all duration-300 hover:border-primary/50";
const TEXTAREA_CLASS: &str = "w-full bg-input border border-border rounded-md px-3 py-2 focus:border-primary focus:ring-primary/20 transition-all duration-300 hover:border-primary/50 min-h-32 resize-none";

#[component]
pub fn Contact(page: PageHandle) -> impl IntoView {
    let visible = page.visible(SectionId::Contact);
    let form = RwSignal::new(ContactForm::default());

    // No backend is wired up; the submitter only logs.
    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        if let Err(e) = form.with_untracked(|f| InertSubmitter.submit(f)) {
            tracing::warn!("contact form not sent: {e}");
        }
    };

    let card_class = move || {
        format!(
            "glass-card transition-all duration-1000 {}",
            entrance_class(visible.get(), Entrance::ScaleIn)
        )
    };

    view! {
        <section id="contact" class="py-16 sm:py-20 lg:py-24 bg-card">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    visible=visible
                    title="Join Our Mission"
                    description="Ready to make a difference? Get in touch with our team to explore collaboration opportunities."
                />
                <div class="max-w-3xl mx-auto">
                    <div class=card_class>
                        <form class="p-6 sm:p-8 space-y-4 sm:space-y-6" on:submit=on_submit>
                            <div class="grid sm:grid-cols-2 gap-4 sm:gap-6">
                                <Field field=ContactField::Name form=form />
                                <Field field=ContactField::Email form=form />
                            </div>
                            <Field field=ContactField::Subject form=form />
                            <Field field=ContactField::Message form=form />
                            <button type="submit" class="gradient-button btn-enhanced w-full">
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Text | FieldKind::MultiLine => "text",
    }
}

#[component]
fn Field(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let id = format!("contact-{}", field.key());
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |event: ev::Event| form.update(|f| f.set(field, event_target_value(&event)));

    let control = match field.kind() {
        FieldKind::MultiLine => view! {
            <textarea
                id=id.clone()
                name=field.key()
                class=TEXTAREA_CLASS
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                id=id.clone()
                name=field.key()
                type=input_type(kind)
                class=CONTROL_CLASS
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-card-foreground mb-2">
                {field.label()}
            </label>
            {control}
        </div>
    }
}
