//! Users dashboard domain module.
//!
//! This module is the single home for:
//! - State stored in `StateCtx` for the dashboard (records, search, sort, dialog)
//! - The `RecordsetCompute` behind the table
//! - The commands the UI dispatches
//!
//! UI code under `ui/src/widgets/**` should not define domain `State`/`Compute`/`Command`.
//! It should only read via `ctx.cached::<T>()` / `ctx.state::<T>()` and trigger changes
//! via `ctx.dispatch::<Cmd>()`.

pub mod commands;
pub mod recordset_compute;
pub mod state;

use agit_states::{StateCtx, Time};
use log::info;

pub use commands::{
    ChangePageCommand, CloseDialogCommand, EditSearchCommand, FlushSearchCommand,
    OpenDialogCommand, SubmitDialogCommand, ToggleSortCommand,
};
pub use recordset_compute::RecordsetCompute;
pub use state::{DialogState, SearchInput, SearchState, SortState, UsersInput, UsersState};

use crate::{DashboardConfig, sample_records};

/// Registers every users state, compute and command.
///
/// Adds a `Time` state if the context has none. The sample user expires at
/// that clock's current instant.
pub fn register_users(ctx: &mut StateCtx, config: &DashboardConfig) {
    if ctx.try_state::<Time>().is_err() {
        ctx.add_state(Time::default());
    }

    let records = if config.seed_sample() {
        sample_records(ctx.state::<Time>().now())
    } else {
        Vec::new()
    };
    info!(
        "Registering users dashboard with {} records, search debounce {:?}",
        records.len(),
        config.search_debounce()
    );

    ctx.add_state(config.clone());
    ctx.add_state(UsersState::new(records));
    ctx.add_state(SearchState::default());
    ctx.add_state(SortState::default());
    ctx.add_state(SearchInput::new(config.search_debounce()));
    ctx.add_state(DialogState::default());
    ctx.add_state(UsersInput::default());

    ctx.record_compute(RecordsetCompute::default());

    ctx.record_command(EditSearchCommand);
    ctx.record_command(FlushSearchCommand);
    ctx.record_command(ToggleSortCommand);
    ctx.record_command(ChangePageCommand);
    ctx.record_command(OpenDialogCommand);
    ctx.record_command(CloseDialogCommand);
    ctx.record_command(SubmitDialogCommand);
}
