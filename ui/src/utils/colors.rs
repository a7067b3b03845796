//! Shared color constants for the UI.

use agit_business::GroupAccess;
use egui::Color32;

/// Forest green, the admin chip.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// The member chip.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(33, 150, 243);

/// Red for destructive actions and inline validation errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Border color for the table (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

pub fn group_color(group: GroupAccess) -> Color32 {
    match group {
        GroupAccess::Admin => COLOR_GREEN,
        GroupAccess::Member => COLOR_BLUE,
    }
}
