//! Review carousel scroll math.
//!
//! The carousel pages by one container width and wraps around: `next` at
//! the end jumps to the start and `prev` at the start jumps to the end.
//! Touch drags scroll at twice the finger distance.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Distance (px) from either end treated as "at the end".
pub const WRAP_TOLERANCE: f64 = 10.0;
pub const DRAG_MULTIPLIER: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Snapshot of the scroll container's geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Where a button press should scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    /// Absolute offset.
    To(f64),
    /// Relative offset.
    By(f64),
}

pub fn step(direction: Direction, m: ScrollMetrics) -> ScrollTarget {
    match direction {
        Direction::Next if m.scroll_left >= m.max_scroll() - WRAP_TOLERANCE => ScrollTarget::To(0.0),
        Direction::Next => ScrollTarget::By(m.client_width),
        Direction::Prev if m.scroll_left <= WRAP_TOLERANCE => ScrollTarget::To(m.max_scroll()),
        Direction::Prev => ScrollTarget::By(-m.client_width),
    }
}

/// Touch drag anchor recorded on `touchstart`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragStart {
    /// Touch x relative to the container's left edge.
    pub x: f64,
    pub scroll_left: f64,
}

impl DragStart {
    /// Scroll offset for the finger now at `x`.
    pub fn scroll_for(&self, x: f64) -> f64 {
        self.scroll_left - (x - self.x) * DRAG_MULTIPLIER
    }
}

/// Drag in progress between `touchstart` and `touchend`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchDrag {
    start: Option<DragStart>,
}

impl TouchDrag {
    pub fn begin(&mut self, x: f64, scroll_left: f64) {
        self.start = Some(DragStart { x, scroll_left });
    }

    pub fn end(&mut self) {
        self.start = None;
    }

    /// Scroll offset for a `touchmove` at `x`. `None` when no drag started
    /// here, in which case the page keeps its native scrolling.
    pub fn move_to(&self, x: f64) -> Option<f64> {
        self.start.map(|start| start.scroll_for(x))
    }
}
