mod users;

pub use users::users_panel;
