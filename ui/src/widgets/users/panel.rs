//! Main panel for the users dashboard.

use agit_business::{DialogContent, OpenDialogCommand, ToggleSortCommand, UsersInput};
use agit_states::StateCtx;
use egui::{Align, Layout, Response, Ui};

use super::dialogs::user_dialog;
use super::pager::pager;
use super::search::search_box;
use super::table::users_table;

/// Displays the users list: title, "Add member", search, table, pager and
/// whichever dialog is open.
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        let add_clicked = ui
            .horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Users list");
                    ui.weak("See information about all users");
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.button("Add member").clicked()
                })
                .inner
            })
            .inner;

        ui.add_space(8.0);
        search_box(state_ctx, ui);
        ui.add_space(8.0);

        let table = users_table(state_ctx, ui);

        ui.add_space(8.0);
        pager(state_ctx, ui);

        // Apply after rendering so the table borrowed a consistent recordset.
        if add_clicked {
            open_dialog(state_ctx, DialogContent::Create);
        }
        if let Some(content) = table.action {
            open_dialog(state_ctx, content);
        }
        if let Some(column) = table.sort_click {
            state_ctx.update::<UsersInput>(|input| input.sort_click = Some(column));
            state_ctx.dispatch::<ToggleSortCommand>();
        }
        if add_clicked || table.action.is_some() || table.sort_click.is_some() {
            ui.ctx().request_repaint();
        }
    });

    user_dialog(state_ctx, ui);

    response.response
}

fn open_dialog(state_ctx: &mut StateCtx, content: DialogContent) {
    state_ctx.update::<UsersInput>(|input| input.open_dialog = Some(content));
    state_ctx.dispatch::<OpenDialogCommand>();
}

#[cfg(test)]
mod users_panel_test {
    use agit_business::{DashboardConfig, DialogContent, DialogState};
    use chrono::{TimeZone, Utc};
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::State;

    fn harness(config: &DashboardConfig) -> Harness<'static, State> {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        Harness::new_ui_state(
            |ui, state: &mut State| {
                state.ctx.sync_computes();
                super::users_panel(&mut state.ctx, ui);
            },
            State::test(config, now),
        )
    }

    #[test]
    fn renders_title_headers_and_sample() {
        let mut harness = harness(&DashboardConfig::default());
        harness.step();

        assert!(harness.query_by_label("Users list").is_some());
        assert!(harness.query_by_label("Add member").is_some());
        for header in ["Fullname", "Username", "Email", "Group Access", "Expired Date"] {
            assert!(
                harness.query_by_label_contains(header).is_some(),
                "missing header {header}"
            );
        }
        assert!(harness.query_by_label("Actions").is_some());
        assert!(harness.query_by_label("Test Aja").is_some());
        assert!(harness.query_by_label("testAja@mail.com").is_some());
        assert!(harness.query_by_label("ADMIN").is_some());
    }

    #[test]
    fn empty_table_says_so() {
        let mut harness = harness(&DashboardConfig::default().with_seed_sample(false));
        harness.step();

        assert!(harness.query_by_label("No users found").is_some());
        assert!(harness.query_by_label("Page 1 of 1").is_some());
    }

    #[test]
    fn add_member_opens_create_dialog() {
        let mut harness = harness(&DashboardConfig::default());
        harness.step();

        harness.get_by_label("Add member").click();
        harness.step();
        harness.step();

        let content = harness
            .state()
            .ctx
            .state::<DialogState>()
            .dialog
            .as_ref()
            .map(|dialog| dialog.content());
        assert_eq!(content, Some(DialogContent::Create));
        assert!(harness.query_by_label("Create User").is_some());
    }
}
