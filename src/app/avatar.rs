use leptos::prelude::*;

use crate::content::PORTFOLIO;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div
            class="w-40 h-40 md:w-48 md:h-48 rounded-full bg-gradient-to-br from-primary-500 to-primary-700 flex items-center justify-center shadow-2xl ring-4 ring-white dark:ring-secondary-800"
            role="img"
            aria-label=PORTFOLIO.personal.name.clone()
        >
            <span class="text-5xl md:text-6xl font-bold text-white">
                {PORTFOLIO.personal.initials()}
            </span>
        </div>
    }
}
