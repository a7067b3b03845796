//! The user record shown in the dashboard table.

use std::fmt;

use chrono::{DateTime, Utc};

/// Access group of a user. The label is what the table shows and search matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum GroupAccess {
    #[default]
    Admin,
    Member,
}

impl GroupAccess {
    pub const ALL: [Self; 2] = [Self::Admin, Self::Member];

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for GroupAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user entity. `username` is the natural key used for update and delete,
/// resolved to the first record carrying it.
#[derive(Clone, PartialEq, Eq)]
pub struct Record {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub expired_date: DateTime<Utc>,
    pub group_access: GroupAccess,
}

impl Record {
    /// Given and family name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("expired_date", &self.expired_date)
            .field("group_access", &self.group_access)
            .finish()
    }
}

/// The record the dashboard starts with.
pub fn sample_records(now: DateTime<Utc>) -> Vec<Record> {
    vec![Record {
        firstname: "Test".to_owned(),
        lastname: "Aja".to_owned(),
        username: "test_Aja".to_owned(),
        email: "testAja@mail.com".to_owned(),
        password: "Test@aja".to_owned(),
        confirm_password: "Test@aja".to_owned(),
        expired_date: now,
        group_access: GroupAccess::Admin,
    }]
}
