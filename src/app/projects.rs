use leptos::{ev, html, prelude::*};

use crate::content::{Project, ProjectCategory, PORTFOLIO};

use super::reveal::{reveal_class, use_revealed};
use super::skills::FilterButton;

const CARD_TAG_LIMIT: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_revealed(section_ref);
    let (filter, set_filter) = signal(None::<ProjectCategory>);
    let (selected, set_selected) = signal(None::<u32>);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            set_selected.set(None);
        }
    });
    on_cleanup(move || handle.remove());

    let on_open = Callback::new(move |id: u32| set_selected.set(Some(id)));

    view! {
        <section id="projects" node_ref=section_ref class="py-20 bg-white dark:bg-secondary-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-4">"Featured Projects"</h2>
                <div class="w-20 h-1 bg-primary-600 mx-auto mb-12"></div>

                <div class=reveal_class(revealed, "grid md:grid-cols-2 gap-8 mb-20")>
                    {PORTFOLIO
                        .featured_projects()
                        .into_iter()
                        .map(|project| view! { <ProjectCard project on_open featured=true /> })
                        .collect_view()}
                </div>

                <h3 class="text-2xl font-bold text-center mb-8">"All Projects"</h3>
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    <FilterButton
                        label="All".to_string()
                        active=Signal::derive(move || filter.get().is_none())
                        on_select=move || set_filter.set(None)
                    />
                    {ProjectCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <FilterButton
                                    label=category.label().to_string()
                                    active=Signal::derive(move || filter.get() == Some(category))
                                    on_select=move || set_filter.set(Some(category))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        PORTFOLIO
                            .projects_in(filter.get())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project on_open featured=false /> })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(|id| PORTFOLIO.project(id))
                    .map(|project| {
                        view! { <ProjectModal project on_close=move || set_selected.set(None) /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<u32>, featured: bool) -> impl IntoView {
    let id = project.id;
    let (tags, hidden) = project.tag_preview(CARD_TAG_LIMIT);
    let tags = if featured { &project.technologies[..] } else { tags };
    let hidden = if featured { 0 } else { hidden };

    view! {
        <article
            class="group cursor-pointer rounded-xl overflow-hidden bg-secondary-50 dark:bg-secondary-800 shadow-lg hover:shadow-2xl hover:-translate-y-1 transition-all duration-300"
            on:click=move |_| on_open.run(id)
        >
            <div class="h-40 bg-gradient-to-br from-primary-400 to-primary-700 flex items-center justify-center">
                <span class="text-4xl font-bold text-white/80">{project.title.chars().next()}</span>
            </div>
            <div class="p-6">
                <div class="flex items-center justify-between mb-2">
                    <h4 class="text-xl font-bold group-hover:text-primary-600 dark:group-hover:text-primary-400">
                        {project.title.clone()}
                    </h4>
                    <span class="text-xs px-2 py-1 rounded bg-primary-100 text-primary-700 dark:bg-primary-900 dark:text-primary-300">
                        {project.category.label()}
                    </span>
                </div>
                <p class="text-secondary-600 dark:text-secondary-400 mb-4 line-clamp-3">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags.iter().map(|tag| view! { <Tag name=tag.clone() /> }).collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="text-xs px-2 py-1 text-secondary-500">
                                    {format!("+{hidden} more")}
                                </span>
                            }
                        })}
                </div>
                <ProjectLinks project />
            </div>
        </article>
    }
}

#[component]
fn ProjectModal(project: &'static Project, on_close: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-[55] flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm"
            on:click=move |_| on_close()
        >
            <div
                class="relative max-w-2xl w-full max-h-[90vh] overflow-y-auto rounded-xl bg-white dark:bg-secondary-800 shadow-2xl p-8"
                role="dialog"
                aria-modal="true"
                aria-label=project.title.clone()
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 text-2xl text-secondary-400 hover:text-secondary-700 dark:hover:text-secondary-200"
                    aria-label="Close"
                    on:click=move |_| on_close()
                >
                    "×"
                </button>
                <span class="text-xs px-2 py-1 rounded bg-primary-100 text-primary-700 dark:bg-primary-900 dark:text-primary-300">
                    {project.category.label()}
                </span>
                <h3 class="text-2xl font-bold mt-4 mb-4">{project.title.clone()}</h3>
                <p class="text-secondary-600 dark:text-secondary-300 mb-6">{project.description.clone()}</p>
                <h4 class="font-semibold mb-2">"Technologies"</h4>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tag| view! { <Tag name=tag.clone() /> })
                        .collect_view()}
                </div>
                <ProjectLinks project />
            </div>
        </div>
    }
}

#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    view! {
        <div class="flex gap-4">
            <a
                href=project.demo_url.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="text-sm font-medium text-primary-600 hover:text-primary-700 dark:text-primary-400"
                on:click=|ev| ev.stop_propagation()
            >
                "Live Demo ↗"
            </a>
            <a
                href=project.source_url.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="text-sm font-medium text-secondary-600 hover:text-secondary-900 dark:text-secondary-300 dark:hover:text-white"
                on:click=|ev| ev.stop_propagation()
            >
                "Source Code"
            </a>
        </div>
    }
}

#[component]
fn Tag(name: String) -> impl IntoView {
    view! {
        <span class="text-xs px-2 py-1 rounded bg-secondary-200 text-secondary-700 dark:bg-secondary-700 dark:text-secondary-300">
            {name}
        </span>
    }
}
