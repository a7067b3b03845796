use std::any::Any;

/// Plain data stored in a [`StateCtx`](crate::StateCtx).
///
/// Mutating a state through the context marks every compute that lists it in
/// [`Compute::deps`](crate::Compute::deps) as dirty.
pub trait State: Any {}
