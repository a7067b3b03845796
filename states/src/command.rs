use std::any::Any;

use crate::StateCtx;

/// An explicit mutation of the context.
///
/// Commands never run implicitly: UI code dispatches them through
/// [`StateCtx::dispatch`]. Inputs are passed through states the command reads,
/// so a command itself stays a unit struct.
pub trait Command: Any {
    fn run(&self, ctx: &mut StateCtx);
}
