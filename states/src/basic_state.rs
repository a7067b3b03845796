use chrono::{DateTime, TimeDelta, Utc};

use crate::State;

/// The clock every time-dependent computation reads.
///
/// The app loop moves it forward once per frame; tests set it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl State for Time {}

impl Default for Time {
    fn default() -> Self {
        Self { virt: Utc::now() }
    }
}

impl Time {
    pub fn at(virt: DateTime<Utc>) -> Self {
        Self { virt }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn set(&mut self, virt: DateTime<Utc>) {
        self.virt = virt;
    }

    pub fn advance(&mut self, by: TimeDelta) {
        self.virt += by;
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
