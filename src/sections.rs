/// Distance from the top of the viewport that decides the current section.
pub const PROBE_LINE: f64 = 100.0;
/// Scroll offset after which the header switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Viewport-relative bounds of one page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// First section (in navigation order) straddling the probe line.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], probe: f64) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.top <= probe && s.bottom >= probe)
        .map(|s| s.id)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}
