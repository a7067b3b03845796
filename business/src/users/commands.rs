//! Commands of the users dashboard.
//!
//! UI code follows the pattern:
//! - set the input via `ctx.update::<UsersInput>(...)` where the command needs one
//! - `ctx.dispatch::<Command>()`
//! - read back via `ctx.cached::<RecordsetCompute>()` or `ctx.state::<DialogState>()`

use agit_states::{Command, StateCtx, Time};
use log::{debug, info, warn};

use super::recordset_compute::RecordsetCompute;
use super::state::{DialogState, SearchInput, SearchState, SortState, UsersInput, UsersState};
use crate::{
    Dialog, DialogContent, Record, find_by_username, with_created, with_deleted, with_updated,
};

/// Records a keystroke in the search box. Reads `UsersInput::search_text`.
#[derive(Debug, Default)]
pub struct EditSearchCommand;

impl Command for EditSearchCommand {
    fn run(&self, ctx: &mut StateCtx) {
        let Some(text) = ctx.state_mut::<UsersInput>().search_text.take() else {
            return;
        };
        let now = ctx.state::<Time>().now();
        ctx.state_mut::<SearchInput>().edit(text, now);
    }
}

/// Applies the debounced search term once its quiet period is over.
///
/// Dispatched every frame; does nothing until the debounce fires, and leaves
/// the recordset alone when the term did not actually change.
#[derive(Debug, Default)]
pub struct FlushSearchCommand;

impl Command for FlushSearchCommand {
    fn run(&self, ctx: &mut StateCtx) {
        let now = ctx.state::<Time>().now();
        let Some(term) = ctx.state_mut::<SearchInput>().take_due(now) else {
            return;
        };
        if ctx.state::<SearchState>().term == term {
            return;
        }
        debug!("Applying search term {term:?}");
        ctx.state_mut::<SearchState>().term = term;
    }
}

/// Advances the clicked column through its sort cycle. Reads `UsersInput::sort_click`.
#[derive(Debug, Default)]
pub struct ToggleSortCommand;

impl Command for ToggleSortCommand {
    fn run(&self, ctx: &mut StateCtx) {
        let Some(column) = ctx.state_mut::<UsersInput>().sort_click.take() else {
            return;
        };
        let next = ctx.state::<SortState>().directive.toggle(column);
        debug!("Sort directive -> {next:?}");
        ctx.state_mut::<SortState>().directive = next;
    }
}

/// Moves the pager one page. Reads `UsersInput::page_step`.
#[derive(Debug, Default)]
pub struct ChangePageCommand;

impl Command for ChangePageCommand {
    fn run(&self, ctx: &mut StateCtx) {
        let Some(direction) = ctx.state_mut::<UsersInput>().page_step.take() else {
            return;
        };
        let Some(recordset) = ctx.cached_mut::<RecordsetCompute>() else {
            warn!("ChangePageCommand: RecordsetCompute is not registered");
            return;
        };
        if recordset.step(direction) {
            debug!("Page -> {}", recordset.pagination().current());
        }
    }
}

/// Opens a dialog. Reads `UsersInput::open_dialog`.
///
/// Update and delete are prefilled from the first record with the target
/// username; an unknown target leaves the dialog closed.
#[derive(Debug, Default)]
pub struct OpenDialogCommand;

impl Command for OpenDialogCommand {
    fn run(&self, ctx: &mut StateCtx) {
        let Some(content) = ctx.state_mut::<UsersInput>().open_dialog.take() else {
            return;
        };

        let dialog = match content {
            DialogContent::Create => Dialog::create(ctx.state::<Time>().now()),
            DialogContent::Update(target) | DialogContent::Delete(target) => {
                let records = ctx.state::<UsersState>().records();
                let Some(index) = find_by_username(records, &target) else {
                    warn!("OpenDialogCommand: no user named '{target}'");
                    return;
                };
                let record = &records[index];
                if matches!(content, DialogContent::Update(_)) {
                    Dialog::update(record)
                } else {
                    Dialog::delete(record)
                }
            }
        };

        debug!("Opening dialog {:?}", dialog.content());
        ctx.state_mut::<DialogState>().dialog = Some(dialog);
    }
}

/// Cancel: closes the dialog without touching the records.
#[derive(Debug, Default)]
pub struct CloseDialogCommand;

impl Command for CloseDialogCommand {
    fn run(&self, ctx: &mut StateCtx) {
        if ctx.state_mut::<DialogState>().dialog.take().is_some() {
            debug!("Dialog closed");
        }
    }
}

/// Submits the open dialog into the mutation contract.
///
/// A form that fails validation stays open with every field marked touched so
/// all errors show. Otherwise the dialog closes; an update or delete whose
/// target has disappeared is a logged no-op.
#[derive(Debug, Default)]
pub struct SubmitDialogCommand;

impl Command for SubmitDialogCommand {
    fn run(&self, ctx: &mut StateCtx) {
        let Some(dialog) = ctx.state::<DialogState>().dialog.clone() else {
            return;
        };

        let next = match dialog.content() {
            DialogContent::Create => {
                let Some(record) = validated(ctx, &dialog) else {
                    return;
                };
                info!("Created user '{}'", record.username);
                Some(with_created(ctx.state::<UsersState>().records(), record))
            }
            DialogContent::Update(target) => {
                let Some(record) = validated(ctx, &dialog) else {
                    return;
                };
                let next = with_updated(ctx.state::<UsersState>().records(), &target, record);
                if next.is_some() {
                    info!("Updated user '{target}'");
                } else {
                    warn!("Update skipped: no user named '{target}'");
                }
                next
            }
            DialogContent::Delete(target) => {
                let next = with_deleted(ctx.state::<UsersState>().records(), &target);
                if next.is_some() {
                    info!("Deleted user '{target}'");
                } else {
                    warn!("Delete skipped: no user named '{target}'");
                }
                next
            }
        };

        if let Some(next) = next {
            ctx.state_mut::<UsersState>().replace(next);
        }
        ctx.state_mut::<DialogState>().dialog = None;
    }
}

/// The record the form describes, or `None` after marking every field touched.
fn validated(ctx: &mut StateCtx, dialog: &Dialog) -> Option<Record> {
    let now = ctx.state::<Time>().now();
    match dialog.form.validate(now) {
        Ok(record) => Some(record),
        Err(errors) => {
            debug!("Submit rejected with {} invalid fields", errors.len());
            if let Some(open) = ctx.state_mut::<DialogState>().dialog.as_mut() {
                open.touch_all();
            }
            None
        }
    }
}
