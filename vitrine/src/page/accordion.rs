//! FAQ accordion where at most one answer is open.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Vec<bool>,
}

impl Accordion {
    /// An accordion with `len` collapsed items.
    pub fn new(len: usize) -> Self {
        Self {
            expanded: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Index of the open item, if any.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded.iter().position(|&open| open)
    }

    /// Question `index` was clicked: collapse the others and flip it.
    ///
    /// Returns the item's new state, or None for an unknown index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.expanded.len() {
            return None;
        }
        for (i, open) in self.expanded.iter_mut().enumerate() {
            if i != index {
                *open = false;
            }
        }
        self.expanded[index] = !self.expanded[index];
        Some(self.expanded[index])
    }
}
