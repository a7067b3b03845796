use agit_business::{DashboardConfig, register_users};
use agit_states::{StateCtx, Time};
use chrono::{DateTime, Utc};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl State {
    pub fn new(config: &DashboardConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        register_users(&mut ctx, config);

        Self { ctx }
    }

    /// State whose clock starts at `now`; pair with [`crate::DashboardApp::with_manual_time`].
    pub fn test(config: &DashboardConfig, now: DateTime<Utc>) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::at(now));
        register_users(&mut ctx, config);

        Self { ctx }
    }
}
