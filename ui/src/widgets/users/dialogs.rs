//! Create/update form and delete confirmation dialogs.

use agit_business::{
    CloseDialogCommand, Dialog, DialogContent, DialogState, FormField, GroupAccess,
    SubmitDialogCommand,
};
use agit_states::{StateCtx, Time};
use chrono::{DateTime, Utc};
use egui::{Align2, Button, ComboBox, Grid, Id, RichText, TextEdit, Ui, Window};

use crate::utils::colors::COLOR_RED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogAction {
    Cancel,
    Submit,
}

/// Shows the open dialog, if any.
pub fn user_dialog(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(mut dialog) = state_ctx.state::<DialogState>().dialog.clone() else {
        return;
    };
    let now = state_ctx.state::<Time>().now();

    let action = match dialog.content() {
        DialogContent::Create | DialogContent::Update(_) => {
            let before = dialog.clone();
            let action = show_form_dialog(&mut dialog, now, ui);
            if dialog != before {
                state_ctx.update::<DialogState>(|state| state.dialog = Some(dialog));
            }
            action
        }
        DialogContent::Delete(_) => show_delete_dialog(&dialog, ui),
    };

    match action {
        Some(DialogAction::Submit) => state_ctx.dispatch::<SubmitDialogCommand>(),
        Some(DialogAction::Cancel) => state_ctx.dispatch::<CloseDialogCommand>(),
        None => return,
    }
    ui.ctx().request_repaint();
}

fn show_form_dialog(dialog: &mut Dialog, now: DateTime<Utc>, ui: &mut Ui) -> Option<DialogAction> {
    let mut open = true;
    let mut action = None;

    Window::new(dialog.title())
        .id(Id::new("user_form_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            Grid::new("user_form_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for field in FormField::ALL {
                        form_field(ui, dialog, field, now);
                    }

                    ui.label("Group Access");
                    ComboBox::from_id_salt("group_access")
                        .selected_text(group_option_label(dialog.form.group_access))
                        .show_ui(ui, |ui| {
                            for group in GroupAccess::ALL {
                                ui.selectable_value(
                                    &mut dialog.form.group_access,
                                    group,
                                    group_option_label(group),
                                );
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .add(Button::new(RichText::new("Cancel").color(COLOR_RED)))
                    .clicked()
                {
                    action = Some(DialogAction::Cancel);
                }
                if ui
                    .add_enabled(dialog.can_submit(now), Button::new("Submit"))
                    .clicked()
                {
                    action = Some(DialogAction::Submit);
                }
            });
        });

    if !open {
        action = Some(DialogAction::Cancel);
    }
    action
}

/// One labelled input with its inline error underneath.
fn form_field(ui: &mut Ui, dialog: &mut Dialog, field: FormField, now: DateTime<Utc>) {
    let label = ui.label(field.label());
    ui.vertical(|ui| {
        let mut edit = TextEdit::singleline(dialog.form.value_mut(field)).desired_width(260.0);
        match field {
            FormField::Password | FormField::ConfirmPassword => edit = edit.password(true),
            FormField::ExpiredDate => edit = edit.hint_text("YYYY-MM-DDTHH:MM"),
            FormField::FirstName
            | FormField::LastName
            | FormField::Username
            | FormField::Email => {}
        }
        let response = ui.add(edit).labelled_by(label.id);
        if response.changed() || response.lost_focus() {
            dialog.touch(field);
        }

        if let Some(error) = dialog.visible_error(field, now) {
            ui.label(RichText::new(error.to_string()).small().color(COLOR_RED));
        }
    });
    ui.end_row();
}

fn group_option_label(group: GroupAccess) -> &'static str {
    match group {
        GroupAccess::Admin => "Admin",
        GroupAccess::Member => "Member",
    }
}

fn show_delete_dialog(dialog: &Dialog, ui: &mut Ui) -> Option<DialogAction> {
    let mut open = true;
    let mut action = None;

    Window::new(dialog.title())
        .id(Id::new("delete_user_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            if let Some(warning) = dialog.delete_warning() {
                ui.label(warning);
            }
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    action = Some(DialogAction::Cancel);
                }
                if ui
                    .add(Button::new(RichText::new("Confirm").color(egui::Color32::WHITE)).fill(COLOR_RED))
                    .clicked()
                {
                    action = Some(DialogAction::Submit);
                }
            });
        });

    if !open {
        action = Some(DialogAction::Cancel);
    }
    action
}
