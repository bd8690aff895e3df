use tui::layout::Rect;

use crate::{palette::Role, point::Point};

pub const RADIUS: i32 = 6;
pub const SLOT_WIDTH: i32 = 8;
pub const MINUTE_SLOT_WIDTH: i32 = 3;
pub const ROW_HEIGHT: i32 = 4;
pub const ROW_GAP: i32 = 1;

const HOUR_SLOTS: u32 = 4;
const MINUTE_TENS_SLOTS: u32 = 11;
const MINUTE_ONES_SLOTS: u32 = 4;

/// One row of indicator boxes. Slot 0 is never drawn, slot `i` starts at
/// `left + stride * i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    pub left: i32,
    pub top: i32,
    pub stride: i32,
    pub slot_width: i32,
    pub slots: u32,
    pub active: Role,
    /// Lit slots whose index is a multiple of this use `Role::Accent`.
    pub accent_every: Option<u32>,
}

impl RowGeometry {
    pub fn slot_origin(&self, slot: u32) -> Point {
        Point::new(self.left + self.stride * slot as i32, self.top)
    }

    pub fn role_for(&self, slot: u32, lit: u32) -> Role {
        if slot > lit.min(self.slots) {
            Role::Idle
        } else if self.accent_every.is_some_and(|n| slot % n == 0) {
            Role::Accent
        } else {
            self.active
        }
    }
}

/// Positions derived from the terminal size at startup. Resizing does not recompute them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub center: Point,
    pub radius: i32,
    pub hour_tens: RowGeometry,
    pub hour_ones: RowGeometry,
    pub minute_tens: RowGeometry,
    pub minute_ones: RowGeometry,
}

impl Layout {
    pub fn new(area: Rect) -> Self {
        let center = Point::new(i32::from(area.width) / 2, i32::from(area.height) / 4);
        let left = center.x - SLOT_WIDTH * 3;
        let row_top = |row: i32| center.y + RADIUS + 2 + row * (ROW_HEIGHT + ROW_GAP);

        let wide_row = |row: i32, active: Role, slots: u32| RowGeometry {
            left,
            top: row_top(row),
            stride: SLOT_WIDTH,
            slot_width: SLOT_WIDTH,
            slots,
            active,
            accent_every: None,
        };

        Layout {
            center,
            radius: RADIUS,
            hour_tens: wide_row(0, Role::ActiveHour, HOUR_SLOTS),
            hour_ones: wide_row(1, Role::ActiveHour, HOUR_SLOTS),
            minute_tens: RowGeometry {
                left: left + 4,
                top: row_top(2),
                stride: MINUTE_SLOT_WIDTH,
                slot_width: MINUTE_SLOT_WIDTH,
                slots: MINUTE_TENS_SLOTS,
                active: Role::ActiveMinute,
                accent_every: Some(3),
            },
            minute_ones: wide_row(3, Role::ActiveMinute, MINUTE_ONES_SLOTS),
        }
    }

    pub fn rows(&self) -> [&RowGeometry; 4] {
        [
            &self.hour_tens,
            &self.hour_ones,
            &self.minute_tens,
            &self.minute_ones,
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_stack_below_circle() {
        let layout = Layout::new(Rect::new(0, 0, 80, 48));
        assert_eq!(layout.center, Point::new(40, 12));
        assert_eq!(layout.hour_tens.top, 20);
        assert_eq!(layout.hour_ones.top, 25);
        assert_eq!(layout.minute_tens.top, 30);
        assert_eq!(layout.minute_ones.top, 35);
        assert_eq!(layout.hour_tens.slot_origin(1), Point::new(24, 20));
        assert_eq!(layout.minute_tens.slot_origin(1), Point::new(23, 30));
        assert_eq!(layout.minute_tens.slot_origin(11), Point::new(53, 30));
    }

    #[test]
    fn minute_tens_accents_every_third_lit_slot() {
        let row = Layout::new(Rect::new(0, 0, 80, 48)).minute_tens;
        let roles: Vec<Role> = (1..=row.slots).map(|slot| row.role_for(slot, 7)).collect();
        assert_eq!(
            roles,
            vec![
                Role::ActiveMinute,
                Role::ActiveMinute,
                Role::Accent,
                Role::ActiveMinute,
                Role::ActiveMinute,
                Role::Accent,
                Role::ActiveMinute,
                Role::Idle,
                Role::Idle,
                Role::Idle,
                Role::Idle,
            ]
        );
    }

    #[test]
    fn lit_count_is_capped_to_slots() {
        let row = Layout::new(Rect::new(0, 0, 80, 48)).hour_tens;
        assert!((1..=row.slots).all(|slot| row.role_for(slot, 9) == Role::ActiveHour));
        assert!((1..=row.slots).all(|slot| row.role_for(slot, 0) == Role::Idle));
    }
}
