use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt;

use log::{debug, error, trace};

use crate::{Command, Compute, Dep, Error, State, StateSyncStatus};

struct ComputeSlot {
    name: &'static str,
    deps: Vec<TypeId>,
    status: StateSyncStatus,
    compute: Box<dyn Compute>,
}

/// Owner of every state, compute and command of the application.
#[derive(Default)]
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn Any>>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field(
                "computes",
                &self
                    .computes
                    .values()
                    .map(|slot| (slot.name, slot.status))
                    .collect::<Vec<_>>(),
            )
            .field("commands", &self.commands.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a state. Dependent computes become dirty.
    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.states.insert(id, Box::new(state));
        self.mark_dependents_dirty(id);
    }

    /// Registers a compute. It runs on the next [`Self::sync_computes`].
    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let slot = ComputeSlot {
            name: type_name::<T>(),
            deps: compute.deps(),
            status: StateSyncStatus::Init,
            compute: Box::new(compute),
        };
        self.computes.insert(TypeId::of::<T>(), slot);
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("state"))
    }

    /// Mutable access to a state. Computes depending on it are marked dirty,
    /// so only call this when a change is actually intended.
    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        let id = TypeId::of::<T>();
        if !self.states.contains_key(&id) {
            return Err(Error::state_not_found::<T>("state_mut"));
        }
        self.mark_dependents_dirty(id);
        self.states
            .get_mut(&id)
            .and_then(|boxed| boxed.downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("state_mut"))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`Self::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`Self::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// The latest value of a compute, whatever its sync status.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| (*slot.compute).as_any().downcast_ref::<T>())
    }

    /// Mutable access to a compute's cache. Does not change its sync status.
    pub fn cached_mut<T: Compute>(&mut self) -> Option<&mut T> {
        self.computes
            .get_mut(&TypeId::of::<T>())
            .and_then(|slot| (*slot.compute).as_any_mut().downcast_mut::<T>())
    }

    pub fn status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes
            .get(&TypeId::of::<T>())
            .map(|slot| slot.status)
    }

    pub fn mark_dirty<T: Compute>(&mut self) {
        self.set_status(TypeId::of::<T>(), StateSyncStatus::Dirty);
    }

    pub fn mark_clean<T: Compute>(&mut self) {
        self.set_status(TypeId::of::<T>(), StateSyncStatus::Clean);
    }

    /// Re-runs every compute that is not clean.
    ///
    /// A failing compute is logged and left clean so it does not retry every
    /// frame; the next change to one of its dependencies runs it again.
    pub fn sync_computes(&mut self) {
        let Self {
            states, computes, ..
        } = self;

        for slot in computes.values_mut() {
            if !slot.status.needs_sync() {
                continue;
            }
            match slot.compute.compute(Dep::new(states)) {
                Ok(()) => debug!("Compute {} synced", slot.name),
                Err(err) => error!("Compute {} failed: {err}", slot.name),
            }
            slot.status = StateSyncStatus::Clean;
        }
    }

    pub fn try_dispatch<T: Command>(&mut self) -> Result<(), Error> {
        let id = TypeId::of::<T>();
        let command = self
            .commands
            .remove(&id)
            .ok_or_else(|| Error::command_not_found::<T>("dispatch"))?;

        trace!("Dispatching {}", type_name::<T>());
        command.run(self);
        self.commands.insert(id, command);
        Ok(())
    }

    /// Runs a registered command. Unregistered commands are logged and skipped.
    pub fn dispatch<T: Command>(&mut self) {
        if let Err(err) = self.try_dispatch::<T>() {
            error!("{err}");
        }
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.computes.clear();
        self.commands.clear();
    }

    fn set_status(&mut self, id: TypeId, status: StateSyncStatus) {
        if let Some(slot) = self.computes.get_mut(&id) {
            slot.status = status;
        }
    }

    fn mark_dependents_dirty(&mut self, state: TypeId) {
        for slot in self.computes.values_mut() {
            if slot.deps.contains(&state) {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }
}
