//! Cell rendering functions for the users table.

use agit_business::{DialogContent, GroupAccess};
use egui::{Button, CornerRadius, Frame, Margin, RichText, Ui};
use ustr::Ustr;

use crate::utils::colors::{COLOR_RED, group_color};

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Renders the group chip: admin green, member blue.
#[inline]
pub fn render_group_chip(ui: &mut Ui, group: GroupAccess) {
    let color = group_color(group);
    Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                RichText::new(group.label().to_uppercase())
                    .small()
                    .strong()
                    .color(color),
            );
        });
}

/// Renders the edit and delete buttons.
///
/// Returns the dialog to open if any button was clicked.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, username: Ustr) -> Option<DialogContent> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("✏").on_hover_text("Edit User").clicked() {
            action = Some(DialogContent::Update(username));
        }
        if ui
            .add(Button::new(RichText::new("🗑").color(COLOR_RED)))
            .on_hover_text("Delete User")
            .clicked()
        {
            action = Some(DialogContent::Delete(username));
        }
    });

    action
}
