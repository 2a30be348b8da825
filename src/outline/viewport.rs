use std::ops::Range;

/// A fixed-height window of rows scrolled just enough to keep the cursor
/// in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Viewport { offset: 0, height }
    }

    /// First visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll so `row` is visible: up to the row if it is above the window,
    /// down by exactly the overflow if it is below.
    pub fn follow(&mut self, row: usize) {
        let height = self.height.max(1);
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
    }

    /// Visible row range for a list of `len` rows
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = len.min(start + self.height);
        start..end
    }
}
