//! Column definitions for the users table.

use egui_extras::Column;

pub const FULL_NAME_WIDTH: f32 = 150.0;
pub const USERNAME_WIDTH: f32 = 130.0;
pub const EMAIL_WIDTH: f32 = 180.0;
pub const GROUP_WIDTH: f32 = 120.0;
pub const EXPIRED_DATE_WIDTH: f32 = 300.0;
pub const ACTIONS_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 34.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// In display order: Fullname, Username, Email (takes the slack), Group Access,
/// Expired Date, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::auto().at_least(FULL_NAME_WIDTH),
        Column::auto().at_least(USERNAME_WIDTH),
        Column::remainder().at_least(EMAIL_WIDTH),
        Column::exact(GROUP_WIDTH),
        Column::auto().at_least(EXPIRED_DATE_WIDTH),
        Column::exact(ACTIONS_WIDTH),
    ]
}
