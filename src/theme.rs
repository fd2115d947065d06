use serde::{Deserialize, Serialize};

/// Local storage key the preference is kept under.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class for the page root; tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(Theme::Light.toggled().is_dark());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_persisted_form() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
