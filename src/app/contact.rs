use std::sync::Arc;

use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use crate::config::GatewayConfig;
use crate::contact::{
    trimmed_len, validation::MAX_MESSAGE_LEN, ContactForm, DispatchError, EmailGateway, Field,
    SubmissionStatus, SubmitRejected,
};
use crate::content::PORTFOLIO;

use super::header::SocialLinks;
use super::reveal::{reveal_class, use_revealed};
use super::toast::Toasts;

const MESSAGE_WARN_LEN: usize = 800;

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_revealed(section_ref);
    let personal = &PORTFOLIO.personal;

    let form = RwSignal::new(ContactForm::new());
    let toasts = expect_context::<Toasts>();
    let gateway = StoredValue::new(use_context::<Arc<dyn EmailGateway>>());
    let revert_timer = StoredValue::new(None::<TimeoutHandle>);
    // known at build time, so server and browser agree
    let demo_mode = !matches!(GatewayConfig::from_build_env(), Ok(Some(_)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let pending = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(pending)) => pending,
            Some(Err(SubmitRejected::Invalid(notice))) => {
                toasts.show(notice);
                return;
            }
            Some(Err(SubmitRejected::InFlight)) | None => return,
        };

        if let Some(handle) = revert_timer.get_value() {
            handle.clear();
            revert_timer.set_value(None);
        }
        let loading = toasts.show(ContactForm::sending_notice());
        let gateway = gateway.get_value();

        spawn_local(async move {
            let outcome = match &gateway {
                Some(gateway) => gateway.send(&pending.input).await,
                None => Err(DispatchError::Unavailable),
            };
            let Some(done) = form.try_update(|f| f.complete_submit(outcome)) else {
                return;
            };
            toasts.replace(loading, done.notice);

            let generation = done.generation;
            match set_timeout_with_handle(
                move || {
                    form.try_update(|f| f.revert_to_idle(generation));
                },
                done.revert_after,
            ) {
                Ok(handle) => {
                    revert_timer.try_set_value(Some(handle));
                }
                Err(e) => log::warn!("Couldn't schedule status reset: {e:?}"),
            }

            if let (Some(gateway), Some(sent)) = (gateway, done.acknowledge) {
                spawn_local(async move {
                    if let Err(e) = gateway.acknowledge(&sent).await {
                        log::warn!("Auto-reply to {} failed: {e}", sent.email);
                    }
                });
            }
        });
    };

    view! {
        <section id="contact" node_ref=section_ref class="py-20 bg-white dark:bg-secondary-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-4">"Get In Touch"</h2>
                <div class="w-20 h-1 bg-primary-600 mx-auto mb-12"></div>

                <div class=reveal_class(revealed, "grid lg:grid-cols-3 gap-12")>
                    <div class="space-y-6">
                        <p class="text-lg text-secondary-600 dark:text-secondary-300">
                            "Have a project in mind or just want to say hello? My inbox is always open."
                        </p>
                        <ContactCard icon="✉" label="Email" value=personal.email.clone() href=personal.mailto() />
                        <ContactCard icon="☎" label="Phone" value=personal.phone.clone() href=personal.tel() />
                        <ContactCard
                            icon="⌖"
                            label="Location"
                            value=personal.location.clone()
                            href=personal.maps_url()
                        />
                        <div class="flex items-center space-x-2">
                            <SocialLinks />
                        </div>
                        {move || {
                            let sent = form.with(|f| f.sent_count());
                            (sent > 0)
                                .then(|| {
                                    view! {
                                        <p class="inline-block px-3 py-1 rounded-full text-sm bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200">
                                            {format!("Messages sent: {sent}")}
                                        </p>
                                    }
                                })
                        }}
                    </div>

                    <form class="lg:col-span-2 space-y-6" novalidate=true on:submit=on_submit>
                        <StatusBanner form />
                        <div class="grid md:grid-cols-2 gap-6">
                            <FormField form field=Field::Name placeholder="Your name" />
                            <FormField form field=Field::Email placeholder="your@email.com" input_type="email" />
                        </div>
                        <FormField form field=Field::Subject placeholder="What's this about?" />
                        <FormField form field=Field::Message placeholder="Tell me about your project..." multiline=true />

                        <button
                            type="submit"
                            class="w-full md:w-auto px-8 py-3 rounded-lg bg-primary-600 hover:bg-primary-700 disabled:opacity-50 disabled:cursor-not-allowed text-white font-medium shadow-lg transition-colors"
                            disabled=move || form.with(|f| !f.can_submit())
                        >
                            {move || {
                                if form.with(|f| f.is_submitting()) { "Sending..." } else { "Send Message" }
                            }}
                        </button>
                        {demo_mode
                            .then(|| {
                                view! {
                                    <p class="text-sm text-secondary-500 dark:text-secondary-400">
                                        "Demo mode: submissions are simulated and no email is sent."
                                    </p>
                                }
                            })}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(icon: &'static str, label: &'static str, value: String, href: String) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-4 p-4 rounded-xl bg-secondary-50 dark:bg-secondary-800 hover:shadow-lg transition-shadow"
        >
            <span class="w-12 h-12 flex items-center justify-center rounded-full bg-primary-100 text-primary-600 dark:bg-primary-900 dark:text-primary-300 text-xl">
                {icon}
            </span>
            <span>
                <span class="block text-sm text-secondary-500 dark:text-secondary-400">{label}</span>
                <span class="block font-medium">{value}</span>
            </span>
        </a>
    }
}

#[component]
fn StatusBanner(form: RwSignal<ContactForm>) -> impl IntoView {
    move || {
        let (class, text) = match form.with(|f| f.status()) {
            SubmissionStatus::Success => (
                "p-4 rounded-lg bg-green-50 text-green-800 border border-green-200 dark:bg-green-900/30 dark:text-green-200 dark:border-green-800",
                "✓ Message sent successfully! I'll get back to you soon.",
            ),
            SubmissionStatus::Error => (
                "p-4 rounded-lg bg-red-50 text-red-800 border border-red-200 dark:bg-red-900/30 dark:text-red-200 dark:border-red-800",
                "✕ Failed to send message. Please try again or email me directly.",
            ),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => return None,
        };
        Some(view! { <div class=class role="alert">{text}</div> })
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{}", field.key());
    let error = move || form.with(|f| f.errors().get(field).map(str::to_string));
    let value = move || form.with(|f| f.input().get(field).to_string());
    let on_input = move |text: String| form.update(|f| f.set_field(field, text));
    let control_class = move || {
        let border = if error().is_some() {
            "border-red-500 focus:ring-red-500"
        } else {
            "border-secondary-300 dark:border-secondary-600 focus:ring-primary-500"
        };
        format!(
            "w-full px-4 py-3 rounded-lg border bg-white dark:bg-secondary-800 focus:outline-none focus:ring-2 {border}"
        )
    };

    let control = if multiline {
        leptos::either::Either::Left(view! {
            <textarea
                id=id.clone()
                name=field.key()
                rows="6"
                placeholder=placeholder
                class=control_class
                prop:value=value
                disabled=move || form.with(|f| f.is_submitting())
                on:input=move |ev| on_input(event_target_value(&ev))
            ></textarea>
            <MessageCounter form />
        })
    } else {
        leptos::either::Either::Right(view! {
            <input
                id=id.clone()
                name=field.key()
                type=input_type
                placeholder=placeholder
                class=control_class
                prop:value=value
                disabled=move || form.with(|f| f.is_submitting())
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        })
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2">
                {field.label()}
            </label>
            {control}
            {move || error().map(|e| view! { <p class="mt-1 text-sm text-red-600 dark:text-red-400">{e}</p> })}
        </div>
    }
}

#[component]
fn MessageCounter(form: RwSignal<ContactForm>) -> impl IntoView {
    let count = move || form.with(|f| trimmed_len(&f.input().message));

    view! {
        <p class=move || {
            let n = count();
            if n > MAX_MESSAGE_LEN {
                "mt-1 text-right text-xs text-red-600 dark:text-red-400"
            } else if n > MESSAGE_WARN_LEN {
                "mt-1 text-right text-xs text-yellow-600 dark:text-yellow-400"
            } else {
                "mt-1 text-right text-xs text-secondary-500"
            }
        }>{move || format!("{}/{MAX_MESSAGE_LEN}", count())}</p>
    }
}
