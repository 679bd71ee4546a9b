//! Process-local user repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use common::{AppResult, OptionExt};
use domain::{User, UserId, UserKey, FIRST_MEMORY_ID};

use super::{RepositoryKind, UserRepository};

#[derive(Debug)]
struct MemoryState {
    /// Keyed by id; ids only grow, so key order is insertion order.
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// Thread-safe in-memory implementation of UserRepository.
///
/// A single mutex guards both the map and the id counter. Ids start at
/// zero and are never reused for the lifetime of the store.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: Mutex<MemoryState>,
}

impl InMemoryUserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                users: BTreeMap::new(),
                next_id: FIRST_MEMORY_ID,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    fn kind(&self) -> RepositoryKind {
        RepositoryKind::Memory
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn create(&self, full_name: String) -> AppResult<User> {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;

        let user = User::new(id, full_name);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: UserKey) -> AppResult<User> {
        let id = id.resolve()?;
        self.state.lock().users.get(&id).cloned().ok_or_not_found()
    }

    async fn update(&self, id: UserKey, full_name: String) -> AppResult<User> {
        let id = id.resolve()?;
        let mut state = self.state.lock();
        let user = state.users.get_mut(&id).ok_or_not_found()?;
        user.rename(full_name);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserKey) -> AppResult<()> {
        let id = id.resolve()?;
        self.state
            .lock()
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_not_found()
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.state.lock().users.values().cloned().collect())
    }
}
