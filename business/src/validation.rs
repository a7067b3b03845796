//! Field-scoped validation of the create/update user form.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Timelike, Utc};
use regex::Regex;
use thiserror::Error;

use crate::{GroupAccess, Record, datetime_local, parse_datetime_local};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;
const PASSWORD_SPECIALS: &str = "#?!@$%^&*-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    ExpiredDate,
}

impl FormField {
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Username,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::ExpiredDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::ExpiredDate => "Expired Date",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(FormField),
    #[error("minimal {0} characters")]
    TooShort(usize),
    #[error("maximal {0} characters")]
    TooLong(usize),
    #[error("Username not valid")]
    InvalidUsername,
    #[error("email must be a valid email")]
    InvalidEmail,
    #[error("Password is too short - should be 6 chars minimum")]
    PasswordTooShort,
    #[error("Password must contains 1 Uppercase and 1 Special Character")]
    WeakPassword,
    #[error("Passwords must match")]
    PasswordMismatch,
    #[error("Expired Date is not valid")]
    InvalidDate,
    #[error("Expired Date must not be in the past")]
    DateInPast,
}

/// At most one error per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, ValidationError>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &ValidationError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static DOUBLED_SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("validation regex failed to compile: {err}"))
}

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| compile(r"^[a-zA-Z0-9._]{8,20}$"))
}

fn doubled_separator_regex() -> &'static Regex {
    DOUBLED_SEPARATOR_RE.get_or_init(|| compile(r"[_.]{2}"))
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        compile(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
    })
}

fn check_name(field: FormField, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        Err(ValidationError::Required(field))
    } else if len < NAME_MIN {
        Err(ValidationError::TooShort(NAME_MIN))
    } else if len > NAME_MAX {
        Err(ValidationError::TooLong(NAME_MAX))
    } else {
        Ok(())
    }
}

/// 8–20 of `[A-Za-z0-9._]`, no separator at either end, no two in a row.
pub fn check_username(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(FormField::Username));
    }
    let separator = |c: char| c == '_' || c == '.';
    let valid = username_regex().is_match(value)
        && !value.starts_with(separator)
        && !value.ends_with(separator)
        && !doubled_separator_regex().is_match(value);
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidUsername)
    }
}

pub fn check_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(FormField::Email))
    } else if email_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn check_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(FormField::Password));
    }
    if value.chars().count() < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_special = value.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if has_upper && has_special {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Parses the expiration input and rejects anything before the minute `now` falls in.
pub fn check_expired_date(value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(FormField::ExpiredDate));
    }
    let date = parse_datetime_local(value).ok_or(ValidationError::InvalidDate)?;
    let current_minute = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    if date < current_minute {
        Err(ValidationError::DateInPast)
    } else {
        Ok(date)
    }
}

/// Raw input of the user dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `YYYY-MM-DDTHH:MM`, local time.
    pub expired_date: String,
    pub group_access: GroupAccess,
}

impl UserForm {
    /// Empty form for creation: expiry defaults to `now`, group to admin.
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            expired_date: datetime_local(&now),
            group_access: GroupAccess::Admin,
            ..Self::default()
        }
    }

    /// Form prefilled from an existing record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            confirm_password: record.confirm_password.clone(),
            expired_date: datetime_local(&record.expired_date),
            group_access: record.group_access,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.firstname,
            FormField::LastName => &self.lastname,
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
            FormField::ExpiredDate => &self.expired_date,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.firstname,
            FormField::LastName => &mut self.lastname,
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
            FormField::ExpiredDate => &mut self.expired_date,
        }
    }

    pub fn check(&self, field: FormField, now: DateTime<Utc>) -> Result<(), ValidationError> {
        match field {
            FormField::FirstName => check_name(field, &self.firstname),
            FormField::LastName => check_name(field, &self.lastname),
            FormField::Username => check_username(&self.username),
            FormField::Email => check_email(&self.email),
            FormField::Password => check_password(&self.password),
            FormField::ConfirmPassword => {
                if self.confirm_password.is_empty() {
                    Err(ValidationError::Required(field))
                } else if self.confirm_password != self.password {
                    Err(ValidationError::PasswordMismatch)
                } else {
                    Ok(())
                }
            }
            FormField::ExpiredDate => check_expired_date(&self.expired_date, now).map(|_| ()),
        }
    }

    pub fn errors(&self, now: DateTime<Utc>) -> FormErrors {
        FormErrors(
            FormField::ALL
                .into_iter()
                .filter_map(|field| self.check(field, now).err().map(|err| (field, err)))
                .collect(),
        )
    }

    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.errors(now).is_empty()
    }

    /// Builds the record when every field passes.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<Record, FormErrors> {
        let errors = self.errors(now);
        if !errors.is_empty() {
            return Err(errors);
        }
        let expired_date = check_expired_date(&self.expired_date, now).map_err(|err| {
            FormErrors(BTreeMap::from([(FormField::ExpiredDate, err)]))
        })?;

        Ok(Record {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            expired_date,
            group_access: self.group_access,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap()
    }

    fn valid_form() -> UserForm {
        UserForm {
            firstname: "Member".to_owned(),
            lastname: "Satu".to_owned(),
            username: "member_01".to_owned(),
            email: "member01@mail.com".to_owned(),
            password: "Member@1".to_owned(),
            confirm_password: "Member@1".to_owned(),
            expired_date: datetime_local(&(now() + TimeDelta::days(30))),
            group_access: GroupAccess::Member,
        }
    }

    #[test]
    fn valid_form_builds_record() {
        let record = valid_form().validate(now()).unwrap();
        assert_eq!(record.username, "member_01");
        assert_eq!(record.group_access, GroupAccess::Member);
        assert!(record.expired_date > now());
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = UserForm::blank(now()).errors(now());
        assert_eq!(
            errors.get(FormField::FirstName),
            Some(&ValidationError::Required(FormField::FirstName))
        );
        assert_eq!(
            errors.get(FormField::Username).map(ToString::to_string).as_deref(),
            Some("Username is required")
        );
        // The default expiry is the current minute, which is not in the past.
        assert_eq!(errors.get(FormField::ExpiredDate), None);
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn name_length_bounds() {
        let mut form = valid_form();
        form.firstname = "A".to_owned();
        assert_eq!(form.check(FormField::FirstName, now()), Err(ValidationError::TooShort(2)));

        form.lastname = "x".repeat(51);
        assert_eq!(form.check(FormField::LastName, now()), Err(ValidationError::TooLong(50)));

        form.lastname = "x".repeat(50);
        assert_eq!(form.check(FormField::LastName, now()), Ok(()));
    }

    #[test]
    fn username_rules() {
        for ok in ["member_01", "test.user", "abcdefgh", "a1234567890123456789"] {
            assert_eq!(check_username(ok), Ok(()), "{ok}");
        }
        for bad in [
            "short",
            "_member01",
            "member01_",
            ".member01",
            "member__01",
            "member._01",
            "member-0001",
            "a12345678901234567890",
        ] {
            assert_eq!(check_username(bad), Err(ValidationError::InvalidUsername), "{bad}");
        }
    }

    #[test]
    fn sample_username_is_accepted() {
        assert_eq!(check_username("test_Aja"), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(check_email("testAja@mail.com"), Ok(()));
        assert_eq!(check_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(check_email("a@b@c"), Err(ValidationError::InvalidEmail));
        assert_eq!(
            check_email(""),
            Err(ValidationError::Required(FormField::Email))
        );
    }

    #[test]
    fn password_rules() {
        assert_eq!(check_password("Test@aja"), Ok(()));
        assert_eq!(check_password("T@a"), Err(ValidationError::PasswordTooShort));
        assert_eq!(check_password("testaja@"), Err(ValidationError::WeakPassword));
        assert_eq!(check_password("Testaja1"), Err(ValidationError::WeakPassword));
    }

    #[test]
    fn confirmation_must_match() {
        let mut form = valid_form();
        form.confirm_password = "Member@2".to_owned();
        assert_eq!(
            form.check(FormField::ConfirmPassword, now()),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn expired_date_rules() {
        assert_eq!(
            check_expired_date("", now()),
            Err(ValidationError::Required(FormField::ExpiredDate))
        );
        assert_eq!(check_expired_date("19/10/2026", now()), Err(ValidationError::InvalidDate));

        let yesterday = datetime_local(&(now() - TimeDelta::days(1)));
        assert_eq!(check_expired_date(&yesterday, now()), Err(ValidationError::DateInPast));

        let this_minute = datetime_local(&now());
        assert!(check_expired_date(&this_minute, now()).is_ok());
    }

    #[test]
    fn from_record_prefills_every_field() {
        let record = valid_form().validate(now()).unwrap();
        let form = UserForm::from_record(&record);
        assert_eq!(form.username, record.username);
        assert_eq!(form.password, record.password);
        assert_eq!(form.expired_date, datetime_local(&record.expired_date));
    }

    #[test]
    fn value_mut_edits_the_matching_field() {
        let mut form = UserForm::default();
        for field in FormField::ALL {
            form.value_mut(field).push_str(field.label());
        }
        assert_eq!(form.confirm_password, "Confirm Password");
        assert_eq!(form.value(FormField::ExpiredDate), "Expired Date");
    }

    #[test]
    fn errors_display_messages() {
        let mut form = valid_form();
        form.password = "weakpassword".to_owned();
        form.confirm_password = "weakpassword".to_owned();
        let errors = form.validate(now()).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|(_, err)| err.to_string()).collect();
        assert_eq!(
            messages,
            ["Password must contains 1 Uppercase and 1 Special Character"]
        );
    }
}
