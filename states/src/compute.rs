use std::any::{Any, TypeId};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Object-safe access to the concrete type behind a trait object.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A derived cache recomputed from states.
///
/// `deps` lists the `TypeId`s of the states the compute reads. The context
/// marks the compute dirty whenever one of them is mutated, and re-runs
/// `compute` on the next [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
pub trait Compute: AsAny {
    fn deps(&self) -> Vec<TypeId>;

    fn compute(&mut self, deps: Dep<'_>) -> Result<(), Error>;
}

/// Read-only view of the states a compute depends on.
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn Any>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a BTreeMap<TypeId, Box<dyn Any>>) -> Self {
        Self { states }
    }

    pub fn state<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("compute dependency"))
    }
}
