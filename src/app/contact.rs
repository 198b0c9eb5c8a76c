use leptos::{ev::SubmitEvent, prelude::*};

use super::browser::{open_mailto, BrowserTimer};
use super::homepage::SectionHeader;
use crate::contact::{ContactForm, Field, SubmitStatus, STATUS_TIMEOUT};
use crate::motion::RepeatingTask;
use crate::portfolio::PROFILE;
use crate::scroll::SectionId;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    // replacing the value drops, and so cancels, the previous reset
    let reset = StoredValue::new(None::<RepeatingTask<BrowserTimer>>);
    on_cleanup(move || {
        reset.try_update_value(|task| task.take());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|form| form.submit(PROFILE.email, open_mailto)) {
            Some(Ok(())) => log::info!("opened mail client for contact form"),
            Some(Err(err)) => log::error!("contact form: {err}"),
            None => return,
        }
        let task = RepeatingTask::once(BrowserTimer, STATUS_TIMEOUT, move || {
            form.try_update(ContactForm::reset_status);
        });
        reset.set_value(Some(task));
    };

    view! {
        <section id=SectionId::Contact.id() class="py-20 px-4 sm:px-6 lg:px-8 bg-muted/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Have a project in mind or just want to say hello? My inbox is open."
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold">"Let's talk"</h3>
                        <p class="text-muted-foreground leading-relaxed">
                            "Whether it's an internship, a collaboration, or a question, I'll get back to you as soon as I can."
                        </p>
                        <ContactDetail icon="✉️" label="Email">
                            <a href=format!("mailto:{}", PROFILE.email) class="hover:text-primary">
                                {PROFILE.email}
                            </a>
                        </ContactDetail>
                        <ContactDetail icon="📍" label="Location">
                            {PROFILE.location}
                        </ContactDetail>
                        <div class="flex gap-4 pt-2">
                            <a
                                href=PROFILE.linkedin_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-border text-sm hover:bg-muted"
                            >
                                "LinkedIn"
                            </a>
                            <a
                                href=PROFILE.github_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-border text-sm hover:bg-muted"
                            >
                                "GitHub"
                            </a>
                        </div>
                    </div>

                    <form on:submit=on_submit class="p-6 space-y-6 rounded-lg border border-border bg-card">
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <TextInput form field=Field::Name label="Name" placeholder="Your name" />
                            <TextInput
                                form
                                field=Field::Email
                                label="Email"
                                placeholder="your.email@example.com"
                                kind="email"
                            />
                        </div>
                        <TextInput
                            form
                            field=Field::Subject
                            label="Subject"
                            placeholder="What's this about?"
                        />
                        <div>
                            <label for=Field::Message.name() class="block text-sm font-medium mb-2">
                                "Message"
                            </label>
                            <textarea
                                id=Field::Message.name()
                                name=Field::Message.name()
                                rows="5"
                                required=true
                                placeholder="Tell me about your project..."
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.fields().message.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>

                        <StatusBanner form />

                        <button
                            type="submit"
                            class="w-full px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium hover:bg-primary/90 transition-colors"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <span class="flex w-12 h-12 items-center justify-center rounded-full bg-primary/10 text-xl">
                {icon}
            </span>
            <div>
                <p class="font-medium">{label}</p>
                <p class="text-muted-foreground">{children()}</p>
            </div>
        </div>
    }
}

#[component]
fn TextInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium mb-2">
                {label}
            </label>
            <input
                id=field.name()
                name=field.name()
                type=kind
                required=true
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || form.with(|f| f.fields().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn StatusBanner(form: RwSignal<ContactForm>) -> impl IntoView {
    move || match form.with(ContactForm::status) {
        SubmitStatus::Idle => None,
        SubmitStatus::Success => Some(
            view! {
                <p class="p-4 rounded-md border border-green-500/30 bg-green-500/10 text-green-600 dark:text-green-400">
                    "✅ Your mail client should now be open with the message ready to send."
                </p>
            }
            .into_any(),
        ),
        SubmitStatus::Error => Some(
            view! {
                <p class="p-4 rounded-md border border-red-500/30 bg-red-500/10 text-red-600 dark:text-red-400">
                    "❌ Couldn't open your mail client. Please email me directly at "
                    {PROFILE.email}
                    "."
                </p>
            }
            .into_any(),
        ),
    }
}
