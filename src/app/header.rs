use leptos::prelude::*;

use crate::content::PORTFOLIO;

use super::nav::{scroll_to_section, use_section_tracker};
use super::theme::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    let tracker = use_section_tracker();
    let active = tracker.active;
    let scrolled = tracker.scrolled;
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |id: String| {
        scroll_to_section(&id);
        set_menu_open.set(false);
    };

    let nav_link_class = move |id: String| {
        move || {
            if active.with(|a| *a == id) {
                "px-3 py-2 text-sm font-medium text-primary-600 dark:text-primary-400 transition-colors"
            } else {
                "px-3 py-2 text-sm font-medium text-secondary-600 hover:text-primary-600 dark:text-secondary-300 dark:hover:text-primary-400 transition-colors"
            }
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-50 bg-white/90 dark:bg-secondary-900/90 backdrop-blur-md shadow-lg transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-50 bg-transparent transition-all duration-300"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        type="button"
                        class="text-2xl font-bold text-primary-600 dark:text-primary-400"
                        aria-label="Back to top"
                        on:click=move |_| {
                            if let Some(first) = PORTFOLIO.navigation.first() {
                                go_to(first.id.clone());
                            }
                        }
                    >
                        {PORTFOLIO.personal.initials()}
                    </button>

                    <nav class="hidden md:flex items-center space-x-2">
                        {PORTFOLIO
                            .navigation
                            .iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=nav_link_class(item.id.clone())
                                        on:click=move |_| go_to(id.clone())
                                    >
                                        {item.label.clone()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center space-x-2">
                        <div class="hidden md:flex items-center space-x-2">
                            <SocialLinks />
                        </div>
                        <ThemeToggle />
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-lg text-secondary-600 dark:text-secondary-300 hover:bg-secondary-100 dark:hover:bg-secondary-800"
                            aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white dark:bg-secondary-900 border-t border-secondary-200 dark:border-secondary-800 shadow-lg">
                    <nav class="flex flex-col px-4 py-2">
                        {PORTFOLIO
                            .navigation
                            .iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=nav_link_class(item.id.clone())
                                        on:click=move |_| go_to(id.clone())
                                    >
                                        <span class="block text-left">{item.label.clone()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center space-x-2 px-4 pb-4">
                        <SocialLinks />
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    PORTFOLIO
        .personal
        .social
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="p-2 text-secondary-600 hover:text-primary-600 dark:text-secondary-300 dark:hover:text-primary-400 transition-colors"
                    title=link.name.clone()
                    aria-label=link.name.clone()
                >
                    <i class=link.icon.clone() aria-hidden="true"></i>
                    <span class="sr-only">{link.name.clone()}</span>
                </a>
            }
        })
        .collect_view()
}
