//! The create/update/delete dialog.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use ustr::Ustr;

use crate::{FormField, Record, UserForm, ValidationError};

pub const CREATE_TITLE: &str = "Create User";
pub const DELETE_TITLE: &str = "Are you sure you want to delete this user?";

/// Which dialog is open. Update and delete carry the target username.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogContent {
    Create,
    Update(Ustr),
    Delete(Ustr),
}

impl DialogContent {
    pub fn target(&self) -> Option<Ustr> {
        match self {
            Self::Create => None,
            Self::Update(target) | Self::Delete(target) => Some(*target),
        }
    }
}

/// An open dialog: its content, the form being edited and the fields the user
/// has already touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    content: DialogContent,
    /// Full name of the record when the dialog opened, so the title does not
    /// follow edits.
    subject: String,
    pub form: UserForm,
    touched: BTreeSet<FormField>,
}

impl Dialog {
    pub fn create(now: DateTime<Utc>) -> Self {
        Self {
            content: DialogContent::Create,
            subject: String::new(),
            form: UserForm::blank(now),
            touched: BTreeSet::new(),
        }
    }

    pub fn update(record: &Record) -> Self {
        Self {
            content: DialogContent::Update(Ustr::from(&record.username)),
            subject: record.full_name(),
            form: UserForm::from_record(record),
            touched: BTreeSet::new(),
        }
    }

    pub fn delete(record: &Record) -> Self {
        Self {
            content: DialogContent::Delete(Ustr::from(&record.username)),
            subject: record.full_name(),
            form: UserForm::from_record(record),
            touched: BTreeSet::new(),
        }
    }

    pub fn content(&self) -> DialogContent {
        self.content
    }

    pub fn title(&self) -> String {
        match self.content {
            DialogContent::Create => CREATE_TITLE.to_owned(),
            DialogContent::Update(_) => format!("Update User {}", self.subject),
            DialogContent::Delete(_) => DELETE_TITLE.to_owned(),
        }
    }

    /// Body of the delete confirmation; `None` for the form dialogs.
    pub fn delete_warning(&self) -> Option<String> {
        match self.content {
            DialogContent::Delete(target) => Some(format!(
                "After doing a delete, the {target} data cannot be restored."
            )),
            DialogContent::Create | DialogContent::Update(_) => None,
        }
    }

    pub fn touch(&mut self, field: FormField) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(FormField::ALL);
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// The error to show under `field`: only once the field has been touched.
    pub fn visible_error(&self, field: FormField, now: DateTime<Utc>) -> Option<ValidationError> {
        if !self.is_touched(field) {
            return None;
        }
        self.form.check(field, now).err()
    }

    /// Submit is enabled only while the whole form validates.
    pub fn can_submit(&self, now: DateTime<Utc>) -> bool {
        match self.content {
            DialogContent::Delete(_) => true,
            DialogContent::Create | DialogContent::Update(_) => self.form.is_valid(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_records;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
    }

    fn sample() -> Record {
        sample_records(now() + TimeDelta::days(1)).remove(0)
    }

    #[test]
    fn titles_per_content() {
        assert_eq!(Dialog::create(now()).title(), "Create User");
        assert_eq!(Dialog::update(&sample()).title(), "Update User Test Aja");
        assert_eq!(
            Dialog::delete(&sample()).title(),
            "Are you sure you want to delete this user?"
        );
    }

    #[test]
    fn update_title_ignores_edits() {
        let mut dialog = Dialog::update(&sample());
        dialog.form.firstname = "Changed".to_owned();
        assert_eq!(dialog.title(), "Update User Test Aja");
    }

    #[test]
    fn delete_warning_names_the_target() {
        assert_eq!(
            Dialog::delete(&sample()).delete_warning().as_deref(),
            Some("After doing a delete, the test_Aja data cannot be restored.")
        );
        assert_eq!(Dialog::create(now()).delete_warning(), None);
    }

    #[test]
    fn content_carries_target() {
        assert_eq!(Dialog::create(now()).content().target(), None);
        assert_eq!(
            Dialog::update(&sample()).content(),
            DialogContent::Update(Ustr::from("test_Aja"))
        );
    }

    #[test]
    fn errors_show_only_after_touch() {
        let mut dialog = Dialog::create(now());
        assert_eq!(dialog.visible_error(FormField::Username, now()), None);

        dialog.touch(FormField::Username);
        assert_eq!(
            dialog.visible_error(FormField::Username, now()),
            Some(ValidationError::Required(FormField::Username))
        );

        dialog.touch_all();
        assert!(FormField::ALL.iter().all(|field| dialog.is_touched(*field)));
    }

    #[test]
    fn submit_follows_form_validity() {
        assert!(!Dialog::create(now()).can_submit(now()));
        assert!(Dialog::update(&sample()).can_submit(now()));
        assert!(Dialog::delete(&sample()).can_submit(now()));
    }
}
