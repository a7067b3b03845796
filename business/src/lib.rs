mod config;
mod dialog;
mod directory;
mod format;
mod record;
mod recordset;
mod sort;
mod validation;

pub mod users;

pub use config::{DashboardConfig, RawConfig};
pub use dialog::{CREATE_TITLE, DELETE_TITLE, Dialog, DialogContent};
pub use directory::{find_by_username, with_created, with_deleted, with_updated};
pub use format::{
    DATE_DISPLAY_FORMAT, DATETIME_LOCAL_FORMAT, date_format, date_format_in, datetime_local,
    datetime_local_in, parse_datetime_local, parse_datetime_local_in,
};
pub use record::{GroupAccess, Record, sample_records};
pub use recordset::{
    PAGE_SIZE, PageDirection, Pagination, filter_records, matches_search, paginate, process,
    search_projections, sort_records, total_pages,
};
pub use sort::{Column, SortDirective, SortIndicator, locale_compare};
pub use users::{
    ChangePageCommand, CloseDialogCommand, DialogState, EditSearchCommand, FlushSearchCommand,
    OpenDialogCommand, RecordsetCompute, SearchInput, SearchState, SortState, SubmitDialogCommand,
    ToggleSortCommand, UsersInput, UsersState, register_users,
};
pub use validation::{
    FormErrors, FormField, UserForm, ValidationError, check_email, check_expired_date,
    check_password, check_username,
};
