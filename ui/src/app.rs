use agit_business::{FlushSearchCommand, SearchInput};
use agit_states::Time;
use chrono::Utc;

use crate::{state::State, widgets};

pub struct DashboardApp {
    pub state: State,
    /// When false the `Time` state is only moved by whoever owns the app (tests).
    follow_clock: bool,
}

impl DashboardApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            follow_clock: true,
        }
    }

    /// App whose `Time` state is never advanced from the wall clock.
    pub fn with_manual_time(state: State) -> Self {
        Self {
            state,
            follow_clock: false,
        }
    }
}

impl eframe::App for DashboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.follow_clock {
            self.state.ctx.update::<Time>(|time| time.set(Utc::now()));
        }

        // Apply a debounced search term whose quiet period ran out.
        self.state.ctx.dispatch::<FlushSearchCommand>();
        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_panel(&mut self.state.ctx, ui);
        });

        // Commands dispatched by the widgets show up on the next frame.
        self.state.ctx.sync_computes();

        let now = self.state.ctx.state::<Time>().now();
        if let Some(remaining) = self.state.ctx.state::<SearchInput>().remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
