//! Table columns and the three-state sort directive.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

use crate::Record;

/// The six fixed table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    FullName,
    Username,
    Email,
    GroupAccess,
    ExpiredDate,
    Actions,
}

impl Column {
    pub const ALL: [Self; 6] = [
        Self::FullName,
        Self::Username,
        Self::Email,
        Self::GroupAccess,
        Self::ExpiredDate,
        Self::Actions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Fullname",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::GroupAccess => "Group Access",
            Self::ExpiredDate => "Expired Date",
            Self::Actions => "Actions",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.label() == label)
    }

    /// Every column but `Actions` orders the table.
    pub fn is_sortable(self) -> bool {
        !matches!(self, Self::Actions)
    }

    /// Ascending comparison of two records on this column.
    ///
    /// `None` for the unsortable `Actions` column.
    pub fn compare(self, a: &Record, b: &Record) -> Option<Ordering> {
        let ordering = match self {
            Self::FullName => locale_compare(&a.full_name(), &b.full_name()),
            Self::Username => locale_compare(&a.username, &b.username),
            Self::Email => locale_compare(&a.email, &b.email),
            Self::GroupAccess => locale_compare(a.group_access.label(), b.group_access.label()),
            Self::ExpiredDate => a.expired_date.cmp(&b.expired_date),
            Self::Actions => return None,
        };
        Some(ordering)
    }
}

/// What a header shows next to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column cannot be sorted; nothing is drawn.
    Hidden,
    Unsorted,
    Ascending,
    Descending,
}

/// `(column, ascending)`. No column means the filter order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    column: Option<Column>,
    ascending: bool,
}

impl Default for SortDirective {
    fn default() -> Self {
        Self::unsorted()
    }
}

impl SortDirective {
    pub const fn unsorted() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }

    pub const fn ascending(column: Column) -> Self {
        Self {
            column: Some(column),
            ascending: true,
        }
    }

    pub const fn descending(column: Column) -> Self {
        Self {
            column: Some(column),
            ascending: false,
        }
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn is_unsorted(&self) -> bool {
        self.column.is_none()
    }

    /// Next directive after a click on `clicked`'s header.
    ///
    /// A new column starts ascending; the same column goes ascending →
    /// descending → unsorted.
    #[must_use]
    pub fn toggle(self, clicked: Column) -> Self {
        match self.column {
            Some(current) if current == clicked && self.ascending => Self::descending(clicked),
            Some(current) if current == clicked => Self::unsorted(),
            _ => Self::ascending(clicked),
        }
    }

    pub fn indicator(&self, column: Column) -> SortIndicator {
        if !column.is_sortable() {
            return SortIndicator::Hidden;
        }
        match self.column {
            Some(current) if current == column && self.ascending => SortIndicator::Ascending,
            Some(current) if current == column => SortIndicator::Descending,
            _ => SortIndicator::Unsorted,
        }
    }

    /// Comparison applied by the sort step, `None` when order must be kept.
    pub fn compare(&self, a: &Record, b: &Record) -> Option<Ordering> {
        let ordering = self.column?.compare(a, b)?;
        Some(if self.ascending {
            ordering
        } else {
            ordering.reverse()
        })
    }
}

thread_local! {
    static COLLATOR: CollatorBorrowed<'static> =
        Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
            .unwrap_or_else(|err| panic!("root collation data failed to load: {err}"));
}

/// Unicode collation (CLDR root, tertiary strength). Separators sort before
/// digits and digits before letters; accents and case only break ties, with
/// lowercase first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.compare(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_three_states() {
        let start = SortDirective::default();

        let once = start.toggle(Column::Email);
        let twice = once.toggle(Column::Email);
        let thrice = twice.toggle(Column::Email);

        assert_eq!(once, SortDirective::ascending(Column::Email));
        assert_eq!(twice, SortDirective::descending(Column::Email));
        assert_eq!(thrice, start);
    }

    #[test]
    fn clicking_another_column_starts_ascending() {
        let sorted = SortDirective::descending(Column::Username);
        assert_eq!(
            sorted.toggle(Column::FullName),
            SortDirective::ascending(Column::FullName)
        );
    }

    #[test]
    fn indicator_reflects_directive() {
        let directive = SortDirective::descending(Column::Username);
        assert_eq!(directive.indicator(Column::Username), SortIndicator::Descending);
        assert_eq!(directive.indicator(Column::Email), SortIndicator::Unsorted);
        assert_eq!(directive.indicator(Column::Actions), SortIndicator::Hidden);
        assert_eq!(
            SortDirective::ascending(Column::Email).indicator(Column::Email),
            SortIndicator::Ascending
        );
    }

    #[test]
    fn labels_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_label(column.label()), Some(column));
        }
        assert_eq!(Column::from_label(""), None);
    }

    #[test]
    fn locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_puts_lowercase_first_on_ties() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Ab", "aB"), Ordering::Greater);
    }

    #[test]
    fn locale_compare_shorter_prefix_first() {
        assert_eq!(locale_compare("test", "tester"), Ordering::Less);
    }

    #[test]
    fn locale_compare_orders_separators_digits_and_accents() {
        let mut names = vec![
            "user01ab", "user_01a", "test.aja1", "test_aja1", "élodie x", "frank y",
        ];
        names.sort_by(|a, b| locale_compare(a, b));

        assert_eq!(
            names,
            ["élodie x", "frank y", "test_aja1", "test.aja1", "user_01a", "user01ab"]
        );
    }

    #[test]
    fn locale_compare_puts_separator_before_digit_and_letter() {
        assert_eq!(locale_compare("user_1", "user01"), Ordering::Less);
        assert_eq!(locale_compare("a.b", "ab"), Ordering::Less);
        assert_eq!(locale_compare("9lives", "alpha"), Ordering::Less);
        assert_eq!(locale_compare("Émile", "Emma"), Ordering::Less);
    }
}
