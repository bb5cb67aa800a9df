//! Command history recall

/// Previously submitted queries, most recent first, without duplicates
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted query and leave recall mode.
    ///
    /// A query already present keeps its original position.
    pub fn record(&mut self, query: &str) {
        if !query.is_empty() && !self.entries.iter().any(|e| e == query) {
            self.entries.insert(0, query.to_string());
        }
        self.cursor = None;
    }

    /// Step back in time. Returns the entry to place in the input, if any.
    pub fn previous(&mut self) -> Option<&str> {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next < self.entries.len() {
            self.cursor = Some(next);
            Some(&self.entries[next])
        } else {
            None
        }
    }

    /// Step forward in time. Moving past the newest entry yields an empty line.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some("")
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                Some(&self.entries[i - 1])
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
