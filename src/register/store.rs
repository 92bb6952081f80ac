//! In-memory user store
//!
//! Append-only collection of registered users, alive for the process
//! lifetime. Owned by `AppState` rather than a global so tests can run
//! against their own instance and a durable backend can replace it later.

use std::sync::Mutex;

use super::types::UserRecord;

/// Process-lifetime store of registered users
///
/// Appends always succeed and duplicates are permitted; no uniqueness
/// constraint exists on username or email. Records are never mutated or
/// removed once inserted.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record
    pub fn append(&self, user: UserRecord) {
        self.users.lock().unwrap().push(user);
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current contents
    ///
    /// Not exposed over HTTP; used for inspection and tests.
    #[must_use]
    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.users.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    #[test]
    fn test_append_and_len() {
        let store = UserStore::new();
        assert!(store.is_empty());

        store.append(record("alice"));
        store.append(record("bob"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let store = UserStore::new();
        store.append(record("alice"));
        store.append(record("alice"));

        assert_eq!(store.len(), 2);
        let users = store.snapshot();
        assert_eq!(users[0], users[1]);
    }

    #[test]
    fn test_concurrent_appends_lose_nothing() {
        let store = std::sync::Arc::new(UserStore::new());
        let threads = 8;
        let appends_per_thread = 50;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..appends_per_thread {
                        store.append(record(&format!("user-{t}-{i}")));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("appender thread panicked");
        }

        assert_eq!(store.len(), threads * appends_per_thread);
    }
}
