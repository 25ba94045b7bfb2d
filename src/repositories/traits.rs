use crate::domain::BirthdayDate;
use crate::models::Record;

/// Repository for managing contact records.
///
/// Provides abstraction over record storage so command handlers do not
/// depend on a concrete container.
pub trait ContactRepository {
    /// Find the first record whose name equals `name`, ignoring case.
    fn find_by_name(&self, name: &str) -> Option<&Record>;

    /// Mutable variant of [`ContactRepository::find_by_name`].
    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Return the record for `name`, creating and appending an empty one
    /// if none exists. The flag is `true` when a record was created.
    fn add_or_get(&mut self, name: &str) -> (&mut Record, bool);

    /// All records in insertion order.
    fn list_all(&self) -> &[Record];

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }

    /// `(name, birthday)` for every record with a birthday, in store order.
    fn birthday_entries(&self) -> Vec<(&str, BirthdayDate)> {
        self.list_all()
            .iter()
            .filter_map(|record| record.birthday().map(|b| (record.name(), b)))
            .collect()
    }
}
