use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{EdgeInsets, Point, Rect, Size};

/// Which edge of the viewport an item is scrolled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollAnchor {
    Leading,
    Trailing,
}

/// Geometry of a horizontal list of equally sized items.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ListLayout {
    pub item_count: usize,
    pub item_size: Size,
    /// Content insets around the run of items.
    pub insets: EdgeInsets,
    /// Visible size of the list.
    pub viewport: Size,
}

impl ListLayout {
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(
            self.insets.left + self.item_count as f64 * self.item_size.width + self.insets.right,
            self.viewport.height,
        )
    }

    /// Frame of `index` in content coordinates.
    #[must_use]
    pub fn item_frame(&self, index: usize) -> Rect {
        Rect::new(
            self.insets.left + index as f64 * self.item_size.width,
            self.insets.top,
            self.item_size.width,
            self.item_size.height,
        )
    }

    /// Largest horizontal offset that still shows content.
    #[must_use]
    pub fn max_offset_x(&self) -> f64 {
        (self.content_size().width - self.viewport.width).max(0.0)
    }

    /// Items overlapping the horizontal window `[offset_x, offset_x + viewport)`.
    #[must_use]
    pub fn items_in_window(&self, offset_x: f64) -> Range<usize> {
        let width = self.item_size.width;
        if self.item_count == 0 || width.is_nan() || width <= 0.0 {
            return 0..0;
        }
        let first = ((offset_x - self.insets.left) / width).floor().max(0.0) as usize;
        let last = ((offset_x + self.viewport.width - self.insets.left) / width)
            .ceil()
            .max(0.0) as usize;
        first.min(self.item_count)..last.min(self.item_count)
    }
}

/// Scrollable item list hosting bar and line chart items.
///
/// The list owns scrolling and item recycling; the chart tells it how many
/// items exist, where to scroll, and which items changed.
pub trait VirtualizedList {
    fn set_layout(&mut self, layout: ListLayout);

    fn layout(&self) -> ListLayout;

    fn content_offset(&self) -> Point;

    fn set_content_offset(&mut self, offset: Point);

    fn scroll_to_item(&mut self, index: usize, anchor: ScrollAnchor);

    /// Items whose content must be rebuilt.
    fn reload_items(&mut self, indices: &[usize]);

    /// Items currently on screen.
    fn visible_items(&self) -> Range<usize>;
}

/// List without a UI: tracks offset, visibility and reload requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessList {
    layout: ListLayout,
    offset: Point,
    reloads: Vec<Vec<usize>>,
}

impl HeadlessList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `reload_items` call so far, oldest first.
    #[must_use]
    pub fn reloads(&self) -> &[Vec<usize>] {
        &self.reloads
    }

    pub fn clear_reloads(&mut self) {
        self.reloads.clear();
    }

    fn clamp(&self, offset: Point) -> Point {
        Point::new(offset.x.clamp(0.0, self.layout.max_offset_x()), 0.0)
    }
}

impl VirtualizedList for HeadlessList {
    fn set_layout(&mut self, layout: ListLayout) {
        self.layout = layout;
        self.offset = self.clamp(self.offset);
    }

    fn layout(&self) -> ListLayout {
        self.layout
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = self.clamp(offset);
    }

    fn scroll_to_item(&mut self, index: usize, anchor: ScrollAnchor) {
        if index >= self.layout.item_count {
            return;
        }
        let frame = self.layout.item_frame(index);
        let x = match anchor {
            ScrollAnchor::Leading => frame.min_x() - self.layout.insets.left,
            ScrollAnchor::Trailing => {
                frame.max_x() + self.layout.insets.right - self.layout.viewport.width
            }
        };
        self.offset = self.clamp(Point::new(x, 0.0));
    }

    fn reload_items(&mut self, indices: &[usize]) {
        self.reloads.push(indices.to_vec());
    }

    fn visible_items(&self) -> Range<usize> {
        self.layout.items_in_window(self.offset.x)
    }
}
