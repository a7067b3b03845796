//! Reactive state container for the dashboard.
//!
//! Application data lives in a single [`StateCtx`]:
//! - [`State`]s are plain data owned by the context,
//! - [`Compute`]s are derived caches that declare the states they read and are
//!   re-run by [`StateCtx::sync_computes`] once one of those states changed,
//! - [`Command`]s are explicit, manually dispatched mutations.
//!
//! [`Time`] is the virtual clock every time-dependent piece reads from, and
//! [`Debounce`] coalesces bursts of events against that clock.

mod basic_state;
mod command;
mod compute;
mod ctx;
mod debounce;
mod error;
mod state;
mod state_sync_status;

pub use basic_state::Time;
pub use command::Command;
pub use compute::{AsAny, Compute, Dep};
pub use ctx::StateCtx;
pub use debounce::Debounce;
pub use error::Error;
pub use state::State;
pub use state_sync_status::StateSyncStatus;
