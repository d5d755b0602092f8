//! Handle-keyed map from integer handle to owned [`Database`].
use std::collections::BTreeMap;

use crate::database::Database;
use crate::error::{Error, Result};

/// Creates, looks up, and releases [`Database`] instances by integer
/// handle.
///
/// `next_id` never decreases, even after `release`: a released handle is
/// never reused, so a stale reference to it reliably resolves to
/// [`Error::UnknownHandle`] rather than silently aliasing a newer
/// database. Mutating the registry (`create`/`release`) must not race
/// with `get` from another thread — this type provides no internal
/// synchronization.
#[derive(Default)]
pub struct Registry {
    databases: BTreeMap<i32, Database>,
    next_id: i32,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Create a new, empty database and return its handle.
    pub fn create(&mut self, name: impl Into<String>) -> i32 {
        let id = self.next_id;
        self.databases.insert(id, Database::new(name));
        self.next_id += 1;
        id
    }

    /// Borrow the database at `handle`.
    pub fn get(&self, handle: i32) -> Result<&Database> {
        self.databases.get(&handle).ok_or(Error::UnknownHandle(handle))
    }

    /// Mutably borrow the database at `handle`.
    pub fn get_mut(&mut self, handle: i32) -> Result<&mut Database> {
        self.databases.get_mut(&handle).ok_or(Error::UnknownHandle(handle))
    }

    /// Remove and drop the database at `handle`.
    pub fn release(&mut self, handle: i32) -> Result<()> {
        self.databases.remove(&handle).ok_or(Error::UnknownHandle(handle))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_increase_and_are_not_reused() {
        let mut reg = Registry::new();
        let h1 = reg.create("a");
        let h2 = reg.create("b");
        assert!(h2 > h1);
        reg.release(h1).unwrap();
        let h3 = reg.create("c");
        assert!(h3 > h1);
        assert!(h3 > h2);
    }

    #[test]
    fn get_on_released_handle_errors() {
        let mut reg = Registry::new();
        let h = reg.create("a");
        reg.release(h).unwrap();
        assert!(reg.get(h).is_err());
    }

    #[test]
    fn get_on_unknown_handle_errors() {
        let reg = Registry::new();
        assert!(reg.get(42).is_err());
    }

    #[test]
    fn first_handle_is_zero() {
        let mut reg = Registry::new();
        assert_eq!(reg.create("a"), 0);
    }
}
