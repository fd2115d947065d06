use leptos::{html, prelude::*};

use crate::content::PORTFOLIO;

use super::nav::scroll_to_section;
use super::reveal::{reveal_class, use_revealed};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_revealed(section_ref);
    let personal = &PORTFOLIO.personal;
    let about = &PORTFOLIO.about;

    view! {
        <section id="about" node_ref=section_ref class="py-20 bg-white dark:bg-secondary-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-4">"About Me"</h2>
                <div class="w-20 h-1 bg-primary-600 mx-auto mb-12"></div>

                <div class=reveal_class(revealed, "grid md:grid-cols-2 gap-12 items-center")>
                    <div>
                        <p class="text-lg text-secondary-600 dark:text-secondary-300 leading-relaxed mb-6">
                            {about.bio.clone()}
                        </p>
                        <ul class="space-y-3 mb-8">
                            {about
                                .highlights
                                .iter()
                                .map(|h| {
                                    view! {
                                        <li class="flex items-start gap-2">
                                            <span class="text-primary-600 dark:text-primary-400">"✓"</span>
                                            <span>{h.clone()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="space-y-2 text-secondary-600 dark:text-secondary-400">
                            <p>
                                <span class="font-medium">"Email: "</span>
                                <a href=personal.mailto() class="hover:text-primary-600">
                                    {personal.email.clone()}
                                </a>
                            </p>
                            <p>
                                <span class="font-medium">"Location: "</span>
                                {personal.location.clone()}
                            </p>
                        </div>
                        <button
                            type="button"
                            class="mt-8 px-6 py-3 rounded-lg bg-primary-600 hover:bg-primary-700 text-white font-medium shadow transition-colors"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Let's Talk"
                        </button>
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                        {about
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="p-6 rounded-xl bg-secondary-50 dark:bg-secondary-800 text-center shadow">
                                        <div class="text-3xl font-bold text-primary-600 dark:text-primary-400 mb-2">
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
                </div>
            </div>
        </section>
    }
}
