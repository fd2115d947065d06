use leptos::{html, prelude::*};

use crate::content::{Skill, SkillCategory, PORTFOLIO};

use super::reveal::{reveal_class, use_revealed};

const BAR_STAGGER_MS: usize = 100;

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_revealed(section_ref);
    // None shows every category
    let (filter, set_filter) = signal(None::<SkillCategory>);

    view! {
        <section id="skills" node_ref=section_ref class="py-20 bg-secondary-50 dark:bg-secondary-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-4">"Skills & Technologies"</h2>
                <div class="w-20 h-1 bg-primary-600 mx-auto mb-12"></div>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    <FilterButton
                        label=format!("All ({})", PORTFOLIO.skills.technical.len())
                        active=Signal::derive(move || filter.get().is_none())
                        on_select=move || set_filter.set(None)
                    />
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <FilterButton
                                    label=format!(
                                        "{} ({})",
                                        category.label(),
                                        PORTFOLIO.skill_count(category),
                                    )
                                    active=Signal::derive(move || filter.get() == Some(category))
                                    on_select=move || set_filter.set(Some(category))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class=reveal_class(revealed, "grid md:grid-cols-2 gap-6 mb-16")>
                    {move || {
                        PORTFOLIO
                            .skills_in(filter.get())
                            .into_iter()
                            .enumerate()
                            .map(|(i, skill)| view! { <SkillBar skill index=i revealed /> })
                            .collect_view()
                    }}
                </div>

                <h3 class="text-2xl font-bold text-center mb-8">"Tools & Platforms"</h3>
                <div class="flex flex-wrap justify-center gap-3">
                    {PORTFOLIO
                        .skills
                        .tools
                        .iter()
                        .map(|tool| {
                            view! {
                                <span class="px-4 py-2 rounded-full bg-white dark:bg-secondary-900 shadow text-sm font-medium">
                                    {tool.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FilterButton(
    label: String,
    #[prop(into)] active: Signal<bool>,
    on_select: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if active.get() {
                    "px-4 py-2 rounded-full text-sm font-medium bg-primary-600 text-white shadow transition-colors"
                } else {
                    "px-4 py-2 rounded-full text-sm font-medium bg-white text-secondary-700 hover:bg-primary-50 dark:bg-secondary-900 dark:text-secondary-300 dark:hover:bg-secondary-700 transition-colors"
                }
            }
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_select()
        >
            {label}
        </button>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let level = skill.level;
    let delay = index * BAR_STAGGER_MS;

    view! {
        <div>
            <div class="flex justify-between mb-2">
                <span class="font-medium">{skill.name.clone()}</span>
                <span class="text-sm text-secondary-500 dark:text-secondary-400">{format!("{level}%")}</span>
            </div>
            <div
                class="h-3 rounded-full bg-secondary-200 dark:bg-secondary-700 overflow-hidden"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=level.to_string()
                aria-label=skill.name.clone()
            >
                <div
                    class="h-full rounded-full bg-gradient-to-r from-primary-500 to-primary-700 transition-all duration-1000 ease-out"
                    style=move || {
                        let width = if revealed.get() { level } else { 0 };
                        format!("width: {width}%; transition-delay: {delay}ms")
                    }
                ></div>
            </div>
        </div>
    }
}
