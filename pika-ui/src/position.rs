//! Popup placement relative to the trigger element.
use crate::options::Position;

/// An axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Geometry needed to place a bound picker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionInput {
    /// Trigger bounds relative to the viewport.
    pub trigger: Rect,
    /// Rendered picker width.
    pub picker_width: f64,
    /// Rendered picker height.
    pub picker_height: f64,
    /// Viewport width.
    pub viewport_width: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Horizontal page scroll offset.
    pub scroll_x: f64,
    /// Vertical page scroll offset.
    pub scroll_y: f64,
}

/// Returns the picker's page coordinates as `(left, top)`.
///
/// The picker sits below the trigger, left-aligned. It aligns to the
/// trigger's right edge when `reposition` is on and it would overflow the
/// viewport, or when `right` is requested and there is room. It opens above
/// the trigger under the same rules for the bottom edge and `top`.
pub fn adjust_position(input: &PositionInput, position: Position, reposition: bool) -> (f64, f64) {
    let trigger = input.trigger;
    let mut left = trigger.left + input.scroll_x;
    let mut top = trigger.bottom() + input.scroll_y;

    let flipped_left = left - input.picker_width + trigger.width;
    if (reposition && left + input.picker_width > input.viewport_width)
        || (position.right && flipped_left > 0.0)
    {
        left = flipped_left;
    }

    let flipped_top = top - input.picker_height - trigger.height;
    if (reposition && top + input.picker_height > input.viewport_height + input.scroll_y)
        || (position.top && flipped_top > 0.0)
    {
        top = flipped_top;
    }

    (left, top)
}
