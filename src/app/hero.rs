use std::time::Duration;

use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::typewriter::{Typewriter, TYPE_DELAY};

use super::avatar::Avatar;
use super::nav::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let personal = &PORTFOLIO.personal;
    let (role, set_role) = signal(String::new());
    let typewriter = StoredValue::new(Typewriter::new(PORTFOLIO.hero.roles.clone()));

    // runs once, in the browser
    Effect::new(move |_| schedule_tick(typewriter, set_role, TYPE_DELAY));

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center pt-16 bg-gradient-to-br from-primary-50 to-white dark:from-secondary-900 dark:to-secondary-800"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center">
                <div class="flex justify-center mb-8">
                    <Avatar />
                </div>
                <h1 class="text-4xl md:text-6xl font-bold mb-4">
                    "Hi, I'm " <span class="text-primary-600 dark:text-primary-400">{personal.name.clone()}</span>
                </h1>
                <p class="text-xl md:text-2xl text-secondary-600 dark:text-secondary-300 mb-6 h-8">
                    <span>{move || role.get()}</span>
                    <span class="animate-pulse" aria-hidden="true">"|"</span>
                </p>
                <p class="text-lg text-secondary-600 dark:text-secondary-400 max-w-2xl mx-auto mb-8">
                    {personal.description.clone()}
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <button
                        type="button"
                        class="px-8 py-3 rounded-lg bg-primary-600 hover:bg-primary-700 text-white font-medium shadow-lg transition-colors"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        type="button"
                        class="px-8 py-3 rounded-lg bg-secondary-900 hover:bg-secondary-700 text-white dark:bg-white dark:text-secondary-900 dark:hover:bg-secondary-200 font-medium shadow-lg transition-colors"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Contact Me"
                    </button>
                    <a
                        href=personal.resume.clone()
                        download=""
                        class="px-8 py-3 rounded-lg border-2 border-primary-600 text-primary-600 hover:bg-primary-600 hover:text-white dark:text-primary-400 dark:border-primary-400 font-medium transition-colors"
                    >
                        "Download CV"
                    </a>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-3xl mx-auto">
                    {PORTFOLIO
                        .hero
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center">
                                    <div class="text-3xl font-bold text-primary-600 dark:text-primary-400">
                                        {stat.value.clone()}
                                    </div>
                                    <div class="text-sm text-secondary-600 dark:text-secondary-400">
                                        {stat.label.clone()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    type="button"
                    class="mt-16 animate-bounce text-secondary-400 hover:text-primary-600"
                    aria-label="Scroll to about"
                    on:click=move |_| scroll_to_section("about")
                >
                    "↓"
                </button>
            </div>
        </section>
    }
}

fn schedule_tick(typewriter: StoredValue<Typewriter>, set_role: WriteSignal<String>, delay: Duration) {
    set_timeout(
        move || {
            // stops once the component is gone
            let Some((next, text)) = typewriter.try_update_value(|tw| {
                let next = tw.tick();
                (next, tw.text().to_string())
            }) else {
                return;
            };
            set_role.set(text);
            schedule_tick(typewriter, set_role, next);
        },
        delay,
    );
}
