//! Catch detection for falling objects
//!
//! Objects are points; the basket presents an axis-aligned catch zone at
//! the bottom of the field. An object that moves into the zone is caught,
//! one that falls past the despawn line is a miss, everything else keeps
//! falling.

use glam::Vec2;

use crate::consts::*;

/// The basket's catch rectangle for one tick
///
/// Built from the post-move basket x; all four sides are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchZone {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl CatchZone {
    /// Zone for a basket centered at `basket_x`
    pub fn for_basket(basket_x: f32) -> Self {
        Self {
            left: basket_x - BASKET_WIDTH / 2.0,
            right: basket_x + BASKET_WIDTH / 2.0,
            top: GAME_HEIGHT - CATCH_BAND_HEIGHT,
            bottom: GAME_HEIGHT,
        }
    }

    /// Point containment, inclusive on all sides
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// What happens to an object after its downward move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFate {
    /// Landed in the catch zone
    Caught,
    /// Still in play
    Falling,
    /// Fell past the despawn line; removed without ceremony
    Missed,
}

/// Classify an object's post-move position against the basket
pub fn classify(pos: Vec2, zone: &CatchZone) -> ObjectFate {
    if zone.contains(pos) {
        ObjectFate::Caught
    } else if pos.y < GAME_HEIGHT + DESPAWN_MARGIN {
        ObjectFate::Falling
    } else {
        ObjectFate::Missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_extents_for_centered_basket() {
        let zone = CatchZone::for_basket(400.0);
        assert_eq!(zone.left, 400.0 - BASKET_WIDTH / 2.0);
        assert_eq!(zone.right, 400.0 + BASKET_WIDTH / 2.0);
        assert_eq!(zone.top, GAME_HEIGHT - CATCH_BAND_HEIGHT);
        assert_eq!(zone.bottom, GAME_HEIGHT);
    }

    #[test]
    fn test_contains_is_inclusive_on_all_sides() {
        let zone = CatchZone::for_basket(400.0);
        assert!(zone.contains(Vec2::new(zone.left, 575.0)));
        assert!(zone.contains(Vec2::new(zone.right, 575.0)));
        assert!(zone.contains(Vec2::new(400.0, zone.top)));
        assert!(zone.contains(Vec2::new(400.0, zone.bottom)));
        // Just outside each side
        assert!(!zone.contains(Vec2::new(zone.left - 0.1, 575.0)));
        assert!(!zone.contains(Vec2::new(zone.right + 0.1, 575.0)));
        assert!(!zone.contains(Vec2::new(400.0, zone.top - 0.1)));
        assert!(!zone.contains(Vec2::new(400.0, zone.bottom + 0.1)));
    }

    #[test]
    fn test_object_above_band_keeps_falling() {
        let zone = CatchZone::for_basket(400.0);
        assert_eq!(classify(Vec2::new(400.0, 100.0), &zone), ObjectFate::Falling);
    }

    #[test]
    fn test_object_beside_basket_keeps_falling_through_band() {
        // In the band vertically but outside the basket's span
        let zone = CatchZone::for_basket(100.0);
        assert_eq!(classify(Vec2::new(700.0, 575.0), &zone), ObjectFate::Falling);
    }

    #[test]
    fn test_catch_in_band() {
        let zone = CatchZone::for_basket(400.0);
        assert_eq!(classify(Vec2::new(410.0, 560.0), &zone), ObjectFate::Caught);
    }

    #[test]
    fn test_miss_boundary_is_strict() {
        let zone = CatchZone::for_basket(100.0);
        let boundary = GAME_HEIGHT + DESPAWN_MARGIN;
        assert_eq!(
            classify(Vec2::new(700.0, boundary - 0.1), &zone),
            ObjectFate::Falling
        );
        assert_eq!(
            classify(Vec2::new(700.0, boundary), &zone),
            ObjectFate::Missed
        );
    }
}
