//! Recently used colors, shared between the panel and sibling views.

use std::cell::RefCell;

use floem::reactive::{RwSignal, SignalUpdate};
use serde::{Deserialize, Serialize};

use crate::config::PanelConfig;
use crate::constants;

/// Where the panel records a color once a drag has settled.
pub trait ColorHistory {
    fn add_color(&self, css: String);
}

/// Most recent first, no duplicates, bounded by `capacity`.
///
/// Deserialized lists go through [`UsedColors::push`], so they are
/// de-duplicated and truncated like live ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredUsedColors")]
pub struct UsedColors {
    colors: Vec<String>,
    capacity: usize,
}

/// Unchecked serialized form.
#[derive(Deserialize)]
struct StoredUsedColors {
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    constants::USED_COLORS_CAPACITY
}

impl From<StoredUsedColors> for UsedColors {
    fn from(stored: StoredUsedColors) -> Self {
        let mut used = Self::with_capacity(stored.capacity);
        // Oldest first, so the first stored entry ends up in front.
        for css in stored.colors.iter().rev() {
            used.push(css);
        }
        used
    }
}

impl Default for UsedColors {
    fn default() -> Self {
        Self::with_capacity(constants::USED_COLORS_CAPACITY)
    }
}

impl UsedColors {
    pub fn from_config(config: &PanelConfig) -> Self {
        Self::with_capacity(config.used_colors_capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Move `css` to the front, dropping the oldest entry when full.
    ///
    /// Entries compare case-insensitively; blank strings are ignored.
    pub fn push(&mut self, css: &str) {
        let css = css.trim();
        if css.is_empty() || self.capacity == 0 {
            return;
        }
        if let Some(existing) = self.position(css) {
            self.colors.remove(existing);
        }
        self.colors.insert(0, css.to_string());
        self.colors.truncate(self.capacity);
        tracing::debug!(color = css, len = self.colors.len(), "used color added");
    }

    pub fn remove(&mut self, css: &str) -> bool {
        match self.position(css.trim()) {
            Some(index) => {
                self.colors.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    fn position(&self, css: &str) -> Option<usize> {
        self.colors.iter().position(|c| c.eq_ignore_ascii_case(css))
    }
}

impl ColorHistory for RefCell<UsedColors> {
    fn add_color(&self, css: String) {
        self.borrow_mut().push(&css);
    }
}

impl ColorHistory for RwSignal<UsedColors> {
    fn add_color(&self, css: String) {
        self.update(|colors| colors.push(&css));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut used = UsedColors::default();
        used.push("#FF0000");
        used.push("#00FF00");
        assert_eq!(used.colors(), ["#00FF00", "#FF0000"]);
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut used = UsedColors::default();
        used.push("#FF0000");
        used.push("#00FF00");
        used.push("#ff0000");
        assert_eq!(used.colors(), ["#ff0000", "#00FF00"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut used = UsedColors::with_capacity(2);
        used.push("#111111");
        used.push("#222222");
        used.push("#333333");
        assert_eq!(used.colors(), ["#333333", "#222222"]);
    }

    #[test]
    fn test_blank_ignored() {
        let mut used = UsedColors::default();
        used.push("   ");
        assert!(used.is_empty());
        assert_eq!(used.capacity(), constants::USED_COLORS_CAPACITY);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut used = UsedColors::default();
        used.push("#111111");
        used.push("#222222");
        assert!(used.remove("#111111"));
        assert!(!used.remove("#111111"));
        assert_eq!(used.len(), 1);
        used.clear();
        assert!(used.is_empty());
    }

    #[test]
    fn test_capacity_from_config() {
        let config = PanelConfig {
            used_colors_capacity: 2,
            ..PanelConfig::default()
        };
        let mut used = UsedColors::from_config(&config);
        assert_eq!(used.capacity(), 2);
        used.push("#111111");
        used.push("#222222");
        used.push("#333333");
        assert_eq!(used.colors(), ["#333333", "#222222"]);
    }

    #[test]
    fn test_deserialize_enforces_capacity() {
        let used: UsedColors =
            serde_json::from_str(r##"{"colors":["#111111","#222222","#333333"],"capacity":1}"##)
                .unwrap();
        assert_eq!(used.capacity(), 1);
        assert_eq!(used.colors(), ["#111111"]);
    }

    #[test]
    fn test_deserialize_removes_duplicates() {
        let used: UsedColors =
            serde_json::from_str(r##"{"colors":["#AAAAAA","#bbbbbb","#aaaaaa"]}"##).unwrap();
        assert_eq!(used.capacity(), constants::USED_COLORS_CAPACITY);
        assert_eq!(used.colors(), ["#AAAAAA", "#bbbbbb"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut used = UsedColors::with_capacity(3);
        used.push("#111111");
        used.push("#222222");
        let json = serde_json::to_string(&used).unwrap();
        let back: UsedColors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, used);
    }

    #[test]
    fn test_history_through_refcell() {
        let history = RefCell::new(UsedColors::default());
        history.add_color(" #ABCDEF ".to_string());
        assert_eq!(history.borrow().colors(), ["#ABCDEF"]);
    }
}
