//! RAII re-entrancy guards, released on success, failure, or drop.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Holds an `AtomicBool` high for as long as it lives.
pub struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    /// `None` if the flag is already held.
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Membership of one key in a pending set.
pub struct Pending<'a> {
    set: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> Pending<'a> {
    /// `None` if `key` is already pending.
    pub fn acquire(set: &'a Mutex<HashSet<String>>, key: &str) -> Option<Self> {
        let inserted = set
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(key.to_string());
        inserted.then(|| Self {
            set,
            key: key.to_string(),
        })
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_flight_is_exclusive_until_dropped() {
        let flag = AtomicBool::new(false);
        let first = InFlight::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlight::acquire(&flag).is_none());
        drop(first);
        assert!(InFlight::acquire(&flag).is_some());
    }

    #[test]
    fn pending_is_per_key() {
        let set = Mutex::new(HashSet::new());
        let a = Pending::acquire(&set, "a");
        assert!(a.is_some());
        assert!(Pending::acquire(&set, "a").is_none());
        assert!(Pending::acquire(&set, "b").is_some());
        drop(a);
        assert!(Pending::acquire(&set, "a").is_some());
    }
}
