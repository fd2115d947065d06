use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("Switching theme to {}", next.class());
        self.set_theme.set(next);
    }
}

/// Theme choice survives reloads through local storage in the browser.
/// The server always renders the default.
pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    view! {
        <button
            type="button"
            class="p-2 rounded-lg text-secondary-600 hover:text-primary-600 hover:bg-secondary-100 dark:text-secondary-300 dark:hover:text-primary-400 dark:hover:bg-secondary-800 transition-colors"
            aria-label=move || ctx.theme.get().toggle_label()
            title=move || ctx.theme.get().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            {move || if ctx.theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
