use ratatui::layout::Rect;

use crate::model::item::Edge;

/// Where the list was drawn on the last frame. Pointer hit-testing reads
/// this, so it always describes what the user is looking at.
///
/// Row 0 of the area is a gutter above the first visible item. Each item
/// then takes `row_height` rows: its label row followed by gutter rows.
/// Drop indicators are drawn into gutter rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLayout {
    pub area: Rect,
    pub row_height: u16,
    /// Index of the first visible item
    pub scroll: usize,
    /// Number of items in the list
    pub count: usize,
}

/// Result of hit-testing a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Outside the list area
    Outside,
    /// Inside the list area but below the last item
    Empty,
    Item { index: usize, edge: Edge },
}

impl ListLayout {
    /// How many items fit in the area.
    pub fn capacity(&self) -> usize {
        if self.row_height == 0 || self.area.height == 0 {
            return 0;
        }
        (self.area.height as usize - 1) / self.row_height as usize
    }

    fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.area.x
            && col < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// Screen row of an item's label, if the item is on screen.
    pub fn label_row(&self, index: usize) -> Option<u16> {
        if index < self.scroll || index >= self.count {
            return None;
        }
        let visible = index - self.scroll;
        if visible >= self.capacity() {
            return None;
        }
        Some(self.area.y + 1 + visible as u16 * self.row_height)
    }

    /// Gutter row a drop indicator for `edge` of item `index` goes in.
    pub fn indicator_row(&self, index: usize, edge: Edge) -> Option<u16> {
        let label = self.label_row(index)?;
        Some(match edge {
            Edge::Before => label - 1,
            Edge::After => label + 1,
        })
    }

    /// Map a cell to an item and the closest edge: the upper half of an
    /// item's rows is `Before`, the lower half `After`. The leading gutter
    /// row belongs to the first visible item.
    pub fn hit_test(&self, col: u16, row: u16) -> Hit {
        if !self.contains(col, row) {
            return Hit::Outside;
        }
        let rel = (row - self.area.y) as usize;
        if rel == 0 {
            return if self.scroll < self.count {
                Hit::Item {
                    index: self.scroll,
                    edge: Edge::Before,
                }
            } else {
                Hit::Empty
            };
        }

        let h = self.row_height as usize;
        if h == 0 {
            return Hit::Empty;
        }
        let visible = (rel - 1) / h;
        let within = (rel - 1) % h;
        let index = self.scroll + visible;
        if visible >= self.capacity() || index >= self.count {
            return Hit::Empty;
        }
        let edge = if within < h / 2 {
            Edge::Before
        } else {
            Edge::After
        };
        Hit::Item { index, edge }
    }
}

/// Smallest scroll change that keeps `focus` on screen.
pub fn scroll_to_show(scroll: usize, focus: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return focus;
    }
    if focus < scroll {
        focus
    } else if focus >= scroll + capacity {
        focus + 1 - capacity
    } else {
        scroll
    }
}
