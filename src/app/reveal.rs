use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Becomes true the first time `target` scrolls into view, and stays true.
pub fn use_revealed(target: NodeRef<html::Section>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    revealed.into()
}

/// Fade/slide-in classes for a revealable block.
pub fn reveal_class(revealed: Signal<bool>, base: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let motion = if revealed.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-8"
        };
        format!("{base} transition-all duration-700 {motion}")
    }
}
