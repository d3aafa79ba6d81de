use std::collections::VecDeque;

use crate::domain::location::Location;

/// Entries kept before the oldest is forgotten
pub const MAX_HISTORY: usize = 100;

/// Navigation history, newest entry last. Always holds at least one location
/// and at most [`MAX_HISTORY`].
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<Location>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: VecDeque::from([initial]),
        }
    }

    pub fn current(&self) -> &Location {
        // `entries` is never empty
        &self.entries[self.entries.len() - 1]
    }

    pub fn push(&mut self, location: Location) -> &Location {
        self.entries.push_back(location);
        if self.entries.len() > MAX_HISTORY {
            self.entries.pop_front();
        }
        self.current()
    }

    /// Steps back one entry. Returns `None` at the first entry.
    pub fn back(&mut self) -> Option<&Location> {
        if self.entries.len() > 1 {
            self.entries.pop_back();
            Some(self.current())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn location(s: &str) -> Location {
        s.parse().unwrap_or_else(|e| panic!("bad test location {s}: {e}"))
    }

    #[test]
    fn test_push_and_back() {
        let mut history = History::default();
        assert!(!history.can_go_back());

        history.push(location("/?page=2"));
        history.push(location("/?page=3"));
        assert_eq!(history.current(), &location("/?page=3"));
        assert_eq!(history.len(), 3);

        assert_eq!(history.back(), Some(&location("/?page=2")));
        assert_eq!(history.back(), Some(&Location::root()));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), &Location::root());
    }

    #[test]
    fn test_history_forgets_oldest_beyond_capacity() {
        let mut history = History::default();
        for page in 2..=MAX_HISTORY + 5 {
            history.push(location(&format!("/?page={page}")));
        }
        assert_eq!(history.len(), MAX_HISTORY);

        while history.back().is_some() {}
        assert_eq!(history.current(), &location("/?page=6"));
        assert!(!history.can_go_back());
    }
}
