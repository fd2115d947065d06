use leptos::prelude::*;

use crate::toast::{Notice, ToastHandle, ToastId, ToastKind, Toaster};

/// Shared handle to the toast queue.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<Toaster>);

impl Toasts {
    pub fn show(self, notice: Notice) -> Option<ToastId> {
        let lifetime = notice.lifetime();
        let handle = self.0.try_update(|t| t.show(notice))?;
        self.expire_after(handle, lifetime);
        Some(handle.id)
    }

    /// Swaps out the toast `id` points at, e.g. a loading toast for its result.
    pub fn replace(self, id: Option<ToastId>, notice: Notice) -> Option<ToastId> {
        let Some(id) = id else {
            return self.show(notice);
        };
        let lifetime = notice.lifetime();
        let handle = self.0.try_update(|t| t.replace(id, notice))?;
        self.expire_after(handle, lifetime);
        Some(handle.id)
    }

    pub fn dismiss(self, id: ToastId) {
        self.0.update(|t| t.dismiss(id));
    }

    fn expire_after(self, handle: ToastHandle, lifetime: Option<std::time::Duration>) {
        if let Some(lifetime) = lifetime {
            set_timeout(
                move || {
                    self.0.try_update(|t| t.expire(handle));
                },
                lifetime,
            );
        }
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts(RwSignal::new(Toaster::default()));
    provide_context(toasts);
    toasts
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div
            class="fixed top-20 right-4 z-[60] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]"
            role="status"
            aria-live="polite"
        >
            {move || {
                toasts
                    .0
                    .with(|t| {
                        t.toasts()
                            .iter()
                            .map(|toast| {
                                let id = toast.id;
                                let (icon, accent) = match toast.notice.kind {
                                    ToastKind::Loading => ("⏳", "border-primary-500"),
                                    ToastKind::Success => ("✓", "border-green-500"),
                                    ToastKind::Error => ("✕", "border-red-500"),
                                };
                                view! {
                                    <div class=format!(
                                        "flex items-start gap-3 p-4 rounded-lg shadow-lg border-l-4 bg-white text-secondary-900 dark:bg-secondary-800 dark:text-white {accent}",
                                    )>
                                        <span aria-hidden="true">{icon}</span>
                                        <p class="flex-1 text-sm">{toast.notice.message.clone()}</p>
                                        <button
                                            type="button"
                                            class="text-secondary-400 hover:text-secondary-600 dark:hover:text-secondary-200"
                                            aria-label="Dismiss notification"
                                            on:click=move |_| toasts.dismiss(id)
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}
