use agit_business::{ChangePageCommand, PageDirection, RecordsetCompute, UsersInput};
use agit_states::StateCtx;
use egui::{Button, RichText, Ui};

/// Previous / "Page X of Y" / Next. Buttons are disabled at the bounds.
pub fn pager(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let pagination = state_ctx
        .cached::<RecordsetCompute>()
        .map(RecordsetCompute::pagination)
        .unwrap_or_default();

    let mut step = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.can_previous(), Button::new("Previous"))
            .clicked()
        {
            step = Some(PageDirection::Previous);
        }
        ui.label(RichText::new(format!(
            "Page {} of {}",
            pagination.current(),
            pagination.display_total()
        )));
        if ui
            .add_enabled(pagination.can_next(), Button::new("Next"))
            .clicked()
        {
            step = Some(PageDirection::Next);
        }
    });

    if let Some(direction) = step {
        state_ctx.update::<UsersInput>(|input| input.page_step = Some(direction));
        state_ctx.dispatch::<ChangePageCommand>();
        ui.ctx().request_repaint();
    }
}

#[cfg(test)]
mod pager_widget_test {
    use agit_business::{
        DashboardConfig, DialogContent, DialogState, GroupAccess, OpenDialogCommand,
        RecordsetCompute, SubmitDialogCommand, UsersInput, datetime_local,
    };
    use chrono::{TimeDelta, TimeZone, Utc};
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::State;

    fn state_with_members(count: usize) -> State {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let mut state = State::test(&DashboardConfig::default(), now);
        for i in 1..=count {
            let ctx = &mut state.ctx;
            ctx.update::<UsersInput>(|input| input.open_dialog = Some(DialogContent::Create));
            ctx.dispatch::<OpenDialogCommand>();
            ctx.update::<DialogState>(|dialog_state| {
                if let Some(dialog) = dialog_state.dialog.as_mut() {
                    dialog.form.firstname = "Member".to_owned();
                    dialog.form.lastname = "Baru".to_owned();
                    dialog.form.username = format!("member_{i:02}");
                    dialog.form.email = format!("member{i:02}@mail.com");
                    dialog.form.password = "Member@1".to_owned();
                    dialog.form.confirm_password = "Member@1".to_owned();
                    dialog.form.expired_date = datetime_local(&(now + TimeDelta::days(7)));
                    dialog.form.group_access = GroupAccess::Member;
                }
            });
            ctx.dispatch::<SubmitDialogCommand>();
        }
        state.ctx.sync_computes();
        state
    }

    fn current_page(harness: &Harness<'_, State>) -> usize {
        harness
            .state()
            .ctx
            .cached::<RecordsetCompute>()
            .map(|recordset| recordset.pagination().current())
            .unwrap_or_default()
    }

    #[test]
    fn single_page_reads_page_one_of_one() {
        let mut harness = Harness::new_ui_state(
            |ui, state: &mut State| super::pager(&mut state.ctx, ui),
            state_with_members(0),
        );
        harness.step();

        assert!(harness.query_by_label("Page 1 of 1").is_some());
    }

    #[test]
    fn next_moves_forward_until_last_page() {
        let mut harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                state.ctx.sync_computes();
                super::pager(&mut state.ctx, ui);
            },
            state_with_members(9),
        );
        harness.step();
        assert!(harness.query_by_label("Page 1 of 2").is_some());

        harness.get_by_label("Next").click();
        harness.step();
        harness.step();
        assert_eq!(current_page(&harness), 2);
        assert!(harness.query_by_label("Page 2 of 2").is_some());

        // Disabled on the last page.
        harness.get_by_label("Next").click();
        harness.step();
        harness.step();
        assert_eq!(current_page(&harness), 2);

        harness.get_by_label("Previous").click();
        harness.step();
        harness.step();
        assert_eq!(current_page(&harness), 1);
    }
}
