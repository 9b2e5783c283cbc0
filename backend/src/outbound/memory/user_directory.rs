//! In-memory user directory guarded by a single mutex.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::{NewUser, User, UserId};

/// Sample users loaded by [`InMemoryUserDirectory::seeded`].
pub const SEED_USERS: [(&str, &str); 3] = [
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Carl", "carl@example.com"),
];

const FIRST_ID: UserId = UserId::new(1);

struct DirectoryState {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

impl DirectoryState {
    fn insert(&mut self, details: NewUser) -> Result<User, UserDirectoryError> {
        let id = self.next_id;
        // The counter moves independently of `users.len()` so deleted ids stay retired.
        self.next_id = id
            .successor()
            .ok_or_else(|| UserDirectoryError::unavailable("user id space exhausted"))?;
        let user = User::new(id, details);
        self.users.push(user.clone());
        Ok(user)
    }

    fn position(&self, id: UserId) -> Result<usize, UserDirectoryError> {
        self.users
            .iter()
            .position(|user| user.id() == id)
            .ok_or_else(|| UserDirectoryError::missing_id(id))
    }
}

/// [`UserDirectory`] backed by a `Vec` behind one `Mutex`.
///
/// Every operation holds the lock for its whole duration, so concurrent
/// handlers observe each create, update, or delete as a single step. Lookups
/// are linear scans.
///
/// # Examples
/// ```
/// use users_api::domain::NewUser;
/// use users_api::domain::ports::UserDirectory;
/// use users_api::outbound::memory::InMemoryUserDirectory;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let directory = InMemoryUserDirectory::new();
/// let alice = directory
///     .create(NewUser::new("Alice", "a@x.com"))
///     .await
///     .expect("create succeeds");
/// assert_eq!(alice.id().get(), 1);
/// # });
/// ```
#[derive(Default)]
pub struct InMemoryUserDirectory {
    state: Mutex<DirectoryState>,
}

impl InMemoryUserDirectory {
    /// Empty directory; the first created user receives id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with [`SEED_USERS`] as ids 1, 2 and 3.
    #[must_use]
    pub fn seeded() -> Self {
        let mut state = DirectoryState::default();
        for (name, email) in SEED_USERS {
            // A fresh counter cannot run out after three ids.
            if let Err(err) = state.insert(NewUser::new(name, email)) {
                error!(error = %err, "failed to seed user directory");
            }
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, DirectoryState>, UserDirectoryError> {
        self.state.lock().map_err(|_| {
            error!("user directory mutex poisoned");
            UserDirectoryError::unavailable("user directory lock poisoned")
        })
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list(&self) -> Result<Vec<User>, UserDirectoryError> {
        let state = self.lock()?;
        Ok(state.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserDirectoryError> {
        let state = self.lock()?;
        state
            .users
            .iter()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or_else(|| UserDirectoryError::missing_id(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserDirectoryError> {
        let state = self.lock()?;
        state
            .users
            .iter()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or_else(|| UserDirectoryError::missing_email(email))
    }

    async fn create(&self, details: NewUser) -> Result<User, UserDirectoryError> {
        let mut state = self.lock()?;
        state.insert(details)
    }

    async fn update(&self, id: UserId, details: NewUser) -> Result<User, UserDirectoryError> {
        let mut state = self.lock()?;
        let index = state.position(id)?;
        let user = &mut state.users[index];
        user.overwrite(details);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserDirectoryError> {
        let mut state = self.lock()?;
        let index = state.position(id)?;
        state.users.remove(index);
        Ok(())
    }
}
