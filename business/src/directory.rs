//! Copy-on-write mutations of the record collection.
//!
//! Each function returns a fresh collection; callers replace the stored one
//! wholesale. Update and delete address the first record with the target
//! username and return `None` when there is none, which callers treat as a
//! no-op.

use crate::Record;

/// Index of the first record with this username.
pub fn find_by_username(records: &[Record], username: &str) -> Option<usize> {
    records.iter().position(|record| record.username == username)
}

/// Appends `record`. Duplicate usernames are accepted.
pub fn with_created(records: &[Record], record: Record) -> Vec<Record> {
    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend_from_slice(records);
    next.push(record);
    next
}

pub fn with_updated(records: &[Record], target: &str, record: Record) -> Option<Vec<Record>> {
    let index = find_by_username(records, target)?;
    let mut next = records.to_vec();
    next[index] = record;
    Some(next)
}

pub fn with_deleted(records: &[Record], target: &str) -> Option<Vec<Record>> {
    let index = find_by_username(records, target)?;
    let mut next = records.to_vec();
    next.remove(index);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GroupAccess, sample_records};
    use chrono::Utc;

    fn member(username: &str) -> Record {
        Record {
            firstname: "Member".to_owned(),
            lastname: "Satu".to_owned(),
            username: username.to_owned(),
            email: "member@mail.com".to_owned(),
            password: "Member@1".to_owned(),
            confirm_password: "Member@1".to_owned(),
            expired_date: Utc::now(),
            group_access: GroupAccess::Member,
        }
    }

    #[test]
    fn create_appends_without_touching_source() {
        let source = sample_records(Utc::now());
        let next = with_created(&source, member("member_01"));

        assert_eq!(source.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].username, "member_01");
    }

    #[test]
    fn create_accepts_duplicate_usernames() {
        let source = vec![member("member_01")];
        let next = with_created(&source, member("member_01"));
        assert_eq!(next.len(), 2);
        assert_eq!(find_by_username(&next, "member_01"), Some(0));
    }

    #[test]
    fn update_replaces_first_match() {
        let source = vec![member("member_01"), member("member_01")];
        let mut renamed = member("member_02");
        renamed.firstname = "Renamed".to_owned();

        let next = with_updated(&source, "member_01", renamed).unwrap();

        assert_eq!(next[0].username, "member_02");
        assert_eq!(next[1].username, "member_01");
    }

    #[test]
    fn update_and_delete_of_unknown_username_are_no_ops() {
        let source = sample_records(Utc::now());
        assert_eq!(find_by_username(&source, "nobody_here"), None);
        assert!(with_updated(&source, "nobody_here", member("x")).is_none());
        assert!(with_deleted(&source, "nobody_here").is_none());
    }

    #[test]
    fn delete_of_only_record_empties_collection() {
        let source = sample_records(Utc::now());
        let next = with_deleted(&source, "test_Aja").unwrap();
        assert!(next.is_empty());
    }
}
