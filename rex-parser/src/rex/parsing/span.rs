//! The span index: which node produced which stretch of the pattern
//!
//! Every node constructor registers the inclusive `[start, end]` range it
//! consumed, labeled with the node's rendered description. The table stores
//! the label text, not the node, so it stays plain owned data and survives
//! the tree however the caller moves it.
//!
//! Coalescing
//!
//!     A run of consecutive plain literal characters would otherwise produce
//!     one entry per character. Registrations flagged coalescable instead
//!     extend the previous entry while the run lasts: the new label is
//!     appended and the entry's end grows by the new span's width. Any
//!     non-coalescable registration (or an explicit [`SpanTable::clear_series`])
//!     breaks the run.
//!
//! Lookup
//!
//!     Spans nest, so several entries can contain one offset. [`SpanTable::lookup`]
//!     returns the shortest containing entry; on equal lengths the earliest
//!     registered wins.

use serde::Serialize;

/// One registered span: a rendered label and the inclusive source range
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanEntry {
    /// The producing node's description, captured at registration time.
    pub label: String,
    /// First character offset covered, inclusive.
    pub start: usize,
    /// Last character offset covered, inclusive.
    pub end: usize,
}

impl SpanEntry {
    /// Number of characters covered.
    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `offset` falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

/// Append-only interval index over one parse.
#[derive(Debug, Clone, Default)]
pub struct SpanTable {
    entries: Vec<SpanEntry>,
    in_series: bool,
}

impl SpanTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a span. When a coalescable run is active and this registration
    /// is itself coalescable, the previous entry absorbs it instead of a new
    /// entry being pushed.
    pub fn register(&mut self, label: String, start: usize, end: usize, can_coalesce: bool) {
        if self.in_series {
            if can_coalesce {
                // In a series: fold the character into the previous entry.
                if let Some(last) = self.entries.last_mut() {
                    last.label.push_str(&label);
                    last.end += end - start + 1;
                }
                return;
            }
            self.in_series = false;
            self.entries.push(SpanEntry { label, start, end });
        } else {
            if can_coalesce {
                self.in_series = true;
            }
            self.entries.push(SpanEntry { label, start, end });
        }
    }

    /// Forcibly end any in-progress coalescing run.
    pub fn clear_series(&mut self) {
        self.in_series = false;
    }

    /// The innermost entry containing `offset`: shortest span wins, and on a
    /// length tie the first-registered entry wins.
    pub fn lookup(&self, offset: usize) -> Option<&SpanEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.contains(offset))
            .min_by_key(|entry| entry.length())
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[SpanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
