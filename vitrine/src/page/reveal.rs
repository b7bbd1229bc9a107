//! Fade-in of cards as they scroll into view.

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The viewport's bottom edge is pulled up by this many pixels, so elements
/// reveal slightly after they enter the screen.
pub const REVEAL_BOTTOM_MARGIN: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tracked {
    top: f64,
    height: f64,
    revealed: bool,
}

impl Tracked {
    fn visible_ratio(&self, view_top: f64, view_bottom: f64) -> f64 {
        let bottom = self.top + self.height;
        if self.height <= 0.0 {
            return if self.top >= view_top && self.top <= view_bottom {
                1.0
            } else {
                0.0
            };
        }
        let overlap = bottom.min(view_bottom) - self.top.max(view_top);
        (overlap / self.height).max(0.0)
    }
}

/// Tracks which observed elements have been revealed. Revealing is one-way.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    items: Vec<Tracked>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an element; it begins hidden. Returns its index.
    pub fn observe(&mut self, top: f64, height: f64) -> usize {
        self.items.push(Tracked {
            top,
            height,
            revealed: false,
        });
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.revealed)
    }

    /// The page scrolled. Returns the indices revealed by this update.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<usize> {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height - REVEAL_BOTTOM_MARGIN;

        let mut newly = Vec::new();
        for (index, item) in self.items.iter_mut().enumerate() {
            if !item.revealed && item.visible_ratio(view_top, view_bottom) >= REVEAL_THRESHOLD {
                item.revealed = true;
                newly.push(index);
            }
        }
        newly
    }
}
