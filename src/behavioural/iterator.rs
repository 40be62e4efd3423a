// Iterator: sequential access to an aggregate without exposing how it is
// stored. Only `HistoryIterator` knows that a history is a Vec.

// ============================================================================
// Example: Cursor - explicit has_next / current / advance protocol
// ============================================================================

pub trait Cursor {
    type Item;

    fn has_next(&self) -> bool;
    /// `None` once the cursor has run past the last element.
    fn current(&self) -> Option<Self::Item>;
    fn advance(&mut self);
}

/// Visited urls of a hypothetical browser, oldest first.
#[derive(Debug, Default, Clone)]
pub struct BrowseHistory {
    urls: Vec<String>,
}

impl BrowseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    /// Removes and returns the most recent url.
    pub fn pop(&mut self) -> Option<String> {
        self.urls.pop()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// The history stays borrowed, so it cannot change under the cursor.
    pub fn create_iterator(&self) -> HistoryIterator<'_> {
        HistoryIterator {
            history: self,
            index: 0,
        }
    }
}

/// Single-pass cursor over a [`BrowseHistory`]. Make a new one to restart.
#[derive(Debug, Clone)]
pub struct HistoryIterator<'a> {
    history: &'a BrowseHistory,
    index: usize,
}

impl<'a> Cursor for HistoryIterator<'a> {
    type Item = &'a str;

    fn has_next(&self) -> bool {
        self.index < self.history.urls.len()
    }

    fn current(&self) -> Option<&'a str> {
        self.history.urls.get(self.index).map(String::as_str)
    }

    fn advance(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }
}

// ============================================================================
// Example: the same cursor as a std Iterator
// ============================================================================

impl<'a> Iterator for HistoryIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.current()?;
        self.advance();
        Some(url)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.urls.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HistoryIterator<'_> {}

impl<'a> IntoIterator for &'a BrowseHistory {
    type Item = &'a str;
    type IntoIter = HistoryIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_iterator()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn history_of(urls: &[&str]) -> BrowseHistory {
        let mut history = BrowseHistory::new();
        for url in urls {
            history.push(*url);
        }
        history
    }

    #[test]
    fn test_cursor_protocol() {
        let history = history_of(&["a", "b", "c", "d", "e"]);
        let mut visited = Vec::new();

        let mut cursor = history.create_iterator();
        while cursor.has_next() {
            visited.push(cursor.current().unwrap());
            cursor.advance();
        }

        assert_eq!(visited, vec!["a", "b", "c", "d", "e"]);
        assert!(!cursor.has_next());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_advance_past_end_is_harmless() {
        let history = history_of(&["only"]);
        let mut cursor = history.create_iterator();
        cursor.advance();
        cursor.advance();
        assert!(!cursor.has_next());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_empty_history() {
        let mut history = BrowseHistory::new();
        assert!(history.is_empty());
        assert!(!history.create_iterator().has_next());
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_pop_returns_latest() {
        let mut history = history_of(&["a", "b"]);
        assert_eq!(history.pop(), Some("b".to_string()));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let history = history_of(&["x", "y"]);
        let mut seen = String::new();
        for url in &history {
            seen.push_str(url);
        }
        assert_eq!(seen, "xy");
        // history still available
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_exact_size() {
        let history = history_of(&["a", "b", "c"]);
        let mut iter = history.create_iterator();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    proptest! {
        #[test]
        fn test_visits_every_push_in_order(urls in prop::collection::vec("[a-z]{1,8}", 0..50)) {
            let mut history = BrowseHistory::new();
            for url in &urls {
                history.push(url.clone());
            }

            let mut cursor = history.create_iterator();
            let mut visited = Vec::new();
            while cursor.has_next() {
                visited.push(cursor.current().unwrap().to_string());
                cursor.advance();
            }

            prop_assert_eq!(&visited, &urls);
            prop_assert!(!cursor.has_next());
            prop_assert_eq!(history.create_iterator().count(), urls.len());
        }
    }
}
