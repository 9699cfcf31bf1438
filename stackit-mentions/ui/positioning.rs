//! Placement of the overlay relative to the token anchor.

use crate::editor::{
  CaretRect,
  Viewport,
};

/// Pixel gap between the anchor and the overlay.
const ANCHOR_MENU_MARGIN: f32 = 4.0;

/// Preferred side of the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionBias {
  Above,
  Below,
}

/// Top-left corner of the overlay, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
  pub x: f32,
  pub y: f32,
}

/// Free space above and below the anchor line within the viewport.
pub fn available_space(anchor: CaretRect, viewport: Viewport) -> (f32, f32) {
  let above = (anchor.y - ANCHOR_MENU_MARGIN).max(0.0);
  let below = (viewport.height - anchor.bottom() - ANCHOR_MENU_MARGIN).max(0.0);
  (above, below)
}

/// Place a menu of the given size next to `anchor`, trying the biased side
/// first and falling back to the other when the menu does not fit; with no
/// bias the roomier side wins (below on a tie). The result is clamped into
/// the viewport.
pub fn position_menu_near_anchor(
  anchor: CaretRect,
  menu_width: f32,
  menu_height: f32,
  viewport: Viewport,
  bias: Option<PositionBias>,
) -> MenuPosition {
  let (available_above, available_below) = available_space(anchor, viewport);

  let use_below = match bias {
    Some(PositionBias::Below) => {
      if available_below >= menu_height {
        true
      } else if available_above >= menu_height {
        false
      } else {
        available_below >= available_above
      }
    },
    Some(PositionBias::Above) => {
      if available_above >= menu_height {
        false
      } else if available_below >= menu_height {
        true
      } else {
        available_above < available_below
      }
    },
    None => available_below >= available_above,
  };

  let y = if use_below {
    anchor.bottom() + ANCHOR_MENU_MARGIN
  } else {
    anchor.y - ANCHOR_MENU_MARGIN - menu_height
  };
  let y = y.max(0.0).min(viewport.height - menu_height);

  // align with the anchor column, clamped into the viewport
  let x = anchor.x.max(0.0).min(viewport.width - menu_width);

  MenuPosition { x, y }
}

#[cfg(test)]
mod tests {
  use super::*;

  const VIEWPORT: Viewport = Viewport {
    width:  640.0,
    height: 480.0,
  };

  fn anchor_at(x: f32, y: f32) -> CaretRect {
    CaretRect {
      x,
      y,
      width: 8.0,
      height: 16.0,
    }
  }

  #[test]
  fn opens_below_when_there_is_room() {
    let anchor = anchor_at(100.0, 100.0);
    let position = position_menu_near_anchor(anchor, 200.0, 100.0, VIEWPORT, Some(PositionBias::Below));
    assert_eq!(position.x, 100.0);
    assert_eq!(position.y, anchor.bottom() + ANCHOR_MENU_MARGIN);
  }

  #[test]
  fn flips_above_near_the_bottom_edge() {
    let anchor = anchor_at(100.0, 440.0);
    let position = position_menu_near_anchor(anchor, 200.0, 100.0, VIEWPORT, Some(PositionBias::Below));
    assert_eq!(position.y, anchor.y - ANCHOR_MENU_MARGIN - 100.0);
  }

  #[test]
  fn clamps_to_the_right_edge() {
    let anchor = anchor_at(600.0, 100.0);
    let position = position_menu_near_anchor(anchor, 200.0, 100.0, VIEWPORT, Some(PositionBias::Below));
    assert_eq!(position.x, VIEWPORT.width - 200.0);
  }

  #[test]
  fn tight_viewport_picks_the_roomier_side() {
    // more space above than below, menu fits neither
    let anchor = anchor_at(0.0, 400.0);
    let position = position_menu_near_anchor(anchor, 200.0, 450.0, VIEWPORT, Some(PositionBias::Below));
    assert!(position.y < anchor.y);
  }

  #[test]
  fn available_space_accounts_for_margins() {
    let (above, below) = available_space(anchor_at(0.0, 100.0), VIEWPORT);
    assert_eq!(above, 96.0);
    assert_eq!(below, VIEWPORT.height - 116.0 - ANCHOR_MENU_MARGIN);
  }
}
