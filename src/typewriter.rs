use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Types out each phrase a character at a time, holds it, deletes it, then
/// moves on to the next, forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn phrase(&self) -> &str {
        self.phrases.get(self.index).map(String::as_str).unwrap_or("")
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// Advances one step and returns how long to wait before the next.
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return HOLD_DELAY;
        }
        let len = self.phrase_len();
        if !self.deleting && self.shown < len {
            self.shown += 1;
            return if self.shown == len {
                HOLD_DELAY
            } else {
                TYPE_DELAY
            };
        }
        self.deleting = true;
        if self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            return TYPE_DELAY;
        }
        self.shown -= 1;
        DELETE_DELAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_types_holds_deletes_and_cycles() {
        let mut tw = typewriter(&["ab", "c"]);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "ab");

        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "c");

        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "a", "wraps back to the first phrase");
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut tw = typewriter(&["héé"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_no_phrases() {
        let mut tw = typewriter(&[]);
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "");
    }
}
