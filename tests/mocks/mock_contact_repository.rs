use assistant_bot::models::Record;
use assistant_bot::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with records and tracks method calls for verification.
#[derive(Default)]
pub struct MockContactRepository {
    records: Vec<Record>,
    call_counts: RefCell<HashMap<String, usize>>,
}

impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the mock repository.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.track_call("find_by_name");
        self.records.iter().find(|record| record.matches_name(name))
    }

    fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.track_call("find_by_name_mut");
        self.records
            .iter_mut()
            .find(|record| record.matches_name(name))
    }

    fn add_or_get(&mut self, name: &str) -> (&mut Record, bool) {
        self.track_call("add_or_get");
        let position = self.records.iter().position(|record| record.matches_name(name));
        match position {
            Some(index) => (&mut self.records[index], false),
            None => {
                self.records.push(Record::new(name));
                let last = self.records.len() - 1;
                (&mut self.records[last], true)
            }
        }
    }

    fn list_all(&self) -> &[Record] {
        self.track_call("list_all");
        &self.records
    }
}
