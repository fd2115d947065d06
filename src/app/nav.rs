use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::PORTFOLIO;
use crate::sections::{active_section, is_scrolled, SectionBounds, PROBE_LINE};

/// Smooth scrolling comes from `scroll-smooth` on the root element.
pub fn scroll_to_section(id: &str) {
    match document().get_element_by_id(id) {
        Some(el) => el.scroll_into_view(),
        None => log::debug!("No section #{id} to scroll to"),
    }
}

pub struct SectionTracker {
    pub active: Signal<String>,
    pub scrolled: Signal<bool>,
}

/// Follows the window scroll to work out which section is under the probe
/// line, and whether the page has left the top.
pub fn use_section_tracker() -> SectionTracker {
    let (_, scroll_y) = use_window_scroll();
    let first = PORTFOLIO
        .navigation
        .first()
        .map(|item| item.id.clone())
        .unwrap_or_default();
    let (active, set_active) = signal(first);

    Effect::new(move |_| {
        scroll_y.track();
        let bounds = PORTFOLIO
            .navigation
            .iter()
            .filter_map(|item| {
                let rect = document()
                    .get_element_by_id(&item.id)?
                    .get_bounding_client_rect();
                Some(SectionBounds {
                    id: &item.id,
                    top: rect.top(),
                    bottom: rect.bottom(),
                })
            })
            .collect::<Vec<_>>();
        // between sections the last highlight stays
        if let Some(id) = active_section(&bounds, PROBE_LINE) {
            if active.with_untracked(|current| current != id) {
                set_active.set(id.to_string());
            }
        }
    });

    SectionTracker {
        active: active.into(),
        scrolled: Signal::derive(move || is_scrolled(scroll_y.get())),
    }
}
