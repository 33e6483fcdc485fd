/// A record that can be kept in a [`Store`].
pub trait Record {
    fn id(&self) -> &str;
}

/// Ordered in-memory collection of records.
///
/// Iteration follows insertion order; lookups are linear, which is fine for
/// the handful of records a single process holds.
#[derive(Debug, Clone)]
pub struct Store<T> {
    records: Vec<T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { records: vec![] }
    }
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_many(&self) -> &[T] {
        &self.records
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    pub fn insert(&mut self, record: T) -> &T {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .map(|index| self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> From<Vec<T>> for Store<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}
