use super::traits::ContactRepository;
use crate::models::Record;

/// In-memory, insertion-ordered collection of contact records.
///
/// Lookup is a linear scan with case-insensitive name equality. Records are
/// never reordered; new ones are appended at the end.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.matches_name(name))
    }
}

impl ContactRepository for AddressBook {
    fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.matches_name(name))
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.matches_name(name))
    }

    fn add_or_get(&mut self, name: &str) -> (&mut Record, bool) {
        match self.position(name) {
            Some(index) => (&mut self.records[index], false),
            None => {
                tracing::debug!(name = %name, "Creating new record");
                self.records.push(Record::new(name));
                let last = self.records.len() - 1;
                (&mut self.records[last], true)
            }
        }
    }

    fn list_all(&self) -> &[Record] {
        &self.records
    }
}
