//! Row rendering for the users table.

use agit_business::{DialogContent, Record, date_format};
use egui_extras::TableRow;
use ustr::Ustr;

use super::cells::{render_action_buttons, render_group_chip, render_text_cell};

/// Renders one record. Returns the dialog its action buttons asked for.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, record: &Record) -> Option<DialogContent> {
    let mut action = None;

    row.col(|ui| render_text_cell(ui, &record.full_name()));
    row.col(|ui| render_text_cell(ui, &record.username));
    row.col(|ui| render_text_cell(ui, &record.email));
    row.col(|ui| render_group_chip(ui, record.group_access));
    row.col(|ui| render_text_cell(ui, &date_format(&record.expired_date)));
    row.col(|ui| {
        action = render_action_buttons(ui, Ustr::from(&record.username));
    });

    action
}
