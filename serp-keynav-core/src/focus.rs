//! Focusable collection
//!
//! An ordered, fixed set of targets with a single focus pointer. Identity is
//! positional; the items themselves are plain data.

/// Ordered targets plus the focus pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusableCollection<T> {
    items: Vec<T>,
    /// Last focused index, 0 until something is focused
    focused_index: usize,
    /// The marked (highlighted) item, if any
    marked: Option<usize>,
}

impl<T> FocusableCollection<T> {
    /// Build a collection in document order; nothing is marked yet
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            focused_index: 0,
            marked: None,
        }
    }

    /// Mark `index` as focused, un-marking the previous item
    ///
    /// Out-of-range indices (including any index on an empty collection) are ignored.
    pub fn focus(&mut self, index: usize) {
        if index >= self.items.len() {
            log::debug!(
                "focus({index}) ignored, collection has {} items",
                self.items.len()
            );
            return;
        }
        self.marked = Some(index);
        self.focused_index = index;
    }

    /// Move to the next item; at the end, wrap to 0 or stay
    pub fn focus_next(&mut self, wrap: bool) {
        if self.items.is_empty() {
            return;
        }
        if self.marked.is_none() {
            self.focus(0);
            return;
        }

        let last = self.items.len() - 1;
        let next = if self.focused_index < last {
            self.focused_index + 1
        } else if wrap {
            0
        } else {
            self.focused_index
        };
        self.focus(next);
    }

    /// Move to the previous item; at 0, wrap to the end or stay
    pub fn focus_previous(&mut self, wrap: bool) {
        if self.items.is_empty() {
            return;
        }
        if self.marked.is_none() {
            self.focus(0);
            return;
        }

        let previous = if self.focused_index > 0 {
            self.focused_index - 1
        } else if wrap {
            self.items.len() - 1
        } else {
            self.focused_index
        };
        self.focus(previous);
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// Index of the marked item, `None` before the first focus
    pub fn marked(&self) -> Option<usize> {
        self.marked
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked == Some(index)
    }

    /// The item at the focus pointer, whether or not it is marked
    pub fn focused_item(&self) -> Option<&T> {
        self.items.get(self.focused_index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for FocusableCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
