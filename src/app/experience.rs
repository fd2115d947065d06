use leptos::{html, prelude::*};

use crate::content::{Experience as Role, PORTFOLIO};

use super::reveal::{reveal_class, use_revealed};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_revealed(section_ref);

    view! {
        <section id="experience" node_ref=section_ref class="py-20 bg-secondary-50 dark:bg-secondary-800">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-4">"Work Experience"</h2>
                <div class="w-20 h-1 bg-primary-600 mx-auto mb-12"></div>

                <div class=reveal_class(revealed, "relative")>
                    <span
                        class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 -translate-x-1/2 bg-primary-200 dark:bg-primary-900"
                        aria-hidden="true"
                    ></span>
                    <ol class="space-y-12">
                        {PORTFOLIO
                            .experience
                            .iter()
                            .enumerate()
                            .map(|(i, role)| view! { <TimelineEntry role right=i % 2 == 1 /> })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}

/// Entries alternate sides of the line on wide screens.
#[component]
fn TimelineEntry(role: &'static Role, right: bool) -> impl IntoView {
    let side = if right { "md:ml-auto md:pl-10" } else { "md:mr-auto md:pr-10" };

    view! {
        <li class=format!("relative pl-12 md:pl-0 md:w-1/2 {side}")>
            <span
                class=if right {
                    "absolute left-4 md:left-0 top-6 w-4 h-4 -translate-x-1/2 rounded-full bg-primary-600 ring-4 ring-white dark:ring-secondary-800"
                } else {
                    "absolute left-4 md:left-auto md:right-0 top-6 w-4 h-4 -translate-x-1/2 md:translate-x-1/2 rounded-full bg-primary-600 ring-4 ring-white dark:ring-secondary-800"
                }
                aria-hidden="true"
            ></span>
            <div class="p-6 rounded-xl bg-white dark:bg-secondary-900 shadow-lg">
                <div class="flex flex-wrap items-baseline justify-between gap-2 mb-2">
                    <h3 class="text-xl font-bold">{role.title.clone()}</h3>
                    <span class="text-sm text-primary-600 dark:text-primary-400 font-medium">
                        {role.duration.clone()}
                    </span>
                </div>
                <p class="text-secondary-600 dark:text-secondary-400 mb-4">
                    {role.company.clone()} " · " {role.location.clone()}
                </p>
                <ul class="list-disc list-inside space-y-2 text-secondary-700 dark:text-secondary-300">
                    {role.description.iter().map(|line| view! { <li>{line.clone()}</li> }).collect_view()}
                </ul>
            </div>
        </li>
    }
}
