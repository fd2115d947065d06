use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::PORTFOLIO;

use super::header::SocialLinks;
use super::nav::scroll_to_section;

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year of the build, so server and browser render the same text.
fn copyright_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let personal = &PORTFOLIO.personal;
    let copyright = match copyright_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", personal.name),
        None => format!("© {}. All rights reserved.", personal.name),
    };

    view! {
        <footer class="py-12 bg-secondary-900 text-secondary-300 dark:bg-black">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <h3 class="text-xl font-bold text-white mb-2">{personal.name.clone()}</h3>
                        <p class="text-sm mb-4">{personal.description.clone()}</p>
                        <a href=personal.mailto() class="text-sm hover:text-white transition-colors">
                            {personal.email.clone()}
                        </a>
                    </div>
                    <nav class="flex flex-wrap gap-4" aria-label="Footer">
                        {PORTFOLIO
                            .navigation
                            .iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="text-sm hover:text-white transition-colors"
                                        on:click=move |_| scroll_to_section(&id)
                                    >
                                        {item.label.clone()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex md:justify-end items-start space-x-2">
                        <SocialLinks />
                    </div>
                </div>
                <div class="pt-8 border-t border-secondary-800 flex flex-col md:flex-row justify-between gap-2 text-sm">
                    <p>{copyright}</p>
                    <p class="text-secondary-500" title=BUILD_TIME>
                        "Built with Rust and Leptos"
                    </p>
                    <button
                        type="button"
                        class="hover:text-white transition-colors"
                        on:click=move |_| {
                            if let Some(first) = PORTFOLIO.navigation.first() {
                                scroll_to_section(&first.id);
                            }
                        }
                    >
                        "Back to top ↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
