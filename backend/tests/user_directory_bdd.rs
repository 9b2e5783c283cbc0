//! Behaviour tests for the in-memory user directory.
//!
//! Steps drive the directory through its port, so the scenarios describe the
//! contract every directory adapter must honour.
use std::sync::Mutex;

use futures::executor::block_on;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use users_api::domain::ports::{UserDirectory, UserDirectoryError};
use users_api::domain::{NewUser, User, UserId};
use users_api::outbound::memory::InMemoryUserDirectory;

#[derive(Default)]
struct DirectoryWorld {
    directory: Option<InMemoryUserDirectory>,
    last_created: Option<User>,
    last_error: Option<UserDirectoryError>,
}

impl std::fmt::Debug for DirectoryWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryWorld")
            .field("directory", &self.directory.as_ref().map(|_| "<directory>"))
            .field("last_created", &self.last_created)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl DirectoryWorld {
    fn directory(&self) -> &InMemoryUserDirectory {
        self.directory.as_ref().expect("directory initialised")
    }

    fn record<T>(&mut self, result: Result<T, UserDirectoryError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.last_error = Some(err);
                None
            }
        }
    }

    fn listed(&self) -> Vec<User> {
        block_on(self.directory().list()).expect("list users")
    }
}

#[fixture]
fn world() -> Mutex<DirectoryWorld> {
    Mutex::new(DirectoryWorld::default())
}

#[given("an empty user directory")]
fn empty_directory(world: &Mutex<DirectoryWorld>) {
    world.lock().expect("world lock").directory = Some(InMemoryUserDirectory::new());
}

#[given("the seeded user directory")]
fn seeded_directory(world: &Mutex<DirectoryWorld>) {
    world.lock().expect("world lock").directory = Some(InMemoryUserDirectory::seeded());
}

#[when("a user named {name} with email {email} is created")]
fn create_user(world: &Mutex<DirectoryWorld>, name: String, email: String) {
    let mut world = world.lock().expect("world lock");
    let result = block_on(world.directory().create(NewUser::new(name, email)));
    let created = world.record(result);
    world.last_created = created;
}

#[when("user {id} is deleted")]
fn delete_user(world: &Mutex<DirectoryWorld>, id: i64) {
    let mut world = world.lock().expect("world lock");
    let result = block_on(world.directory().delete(UserId::new(id)));
    world.record(result);
}

#[when("user {id} is updated to name {name} with email {email}")]
fn update_user(world: &Mutex<DirectoryWorld>, id: i64, name: String, email: String) {
    let mut world = world.lock().expect("world lock");
    let result = block_on(
        world
            .directory()
            .update(UserId::new(id), NewUser::new(name, email)),
    );
    world.record(result);
}

#[then("the last created user has id {id}")]
fn last_created_has_id(world: &Mutex<DirectoryWorld>, id: i64) {
    let world = world.lock().expect("world lock");
    let user = world.last_created.as_ref().expect("a user was created");
    assert_eq!(user.id().get(), id);
}

#[then("the directory lists {count} users")]
fn directory_lists(world: &Mutex<DirectoryWorld>, count: usize) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.listed().len(), count);
}

#[then("listed user {position} is named {name}")]
fn listed_user_is_named(world: &Mutex<DirectoryWorld>, position: usize, name: String) {
    let world = world.lock().expect("world lock");
    let users = world.listed();
    let user = position
        .checked_sub(1)
        .and_then(|index| users.get(index))
        .expect("listed position exists");
    assert_eq!(user.name(), name);
}

#[then("user {id} is named {name}")]
fn user_is_named(world: &Mutex<DirectoryWorld>, id: i64, name: String) {
    let world = world.lock().expect("world lock");
    let user = block_on(world.directory().find_by_id(UserId::new(id))).expect("user exists");
    assert_eq!(user.id().get(), id);
    assert_eq!(user.name(), name);
}

#[then("user {id} cannot be found")]
fn user_cannot_be_found(world: &Mutex<DirectoryWorld>, id: i64) {
    let world = world.lock().expect("world lock");
    let result = block_on(world.directory().find_by_id(UserId::new(id)));
    assert!(matches!(result, Err(UserDirectoryError::NotFound { .. })));
}

#[then("looking up {email} finds {name}")]
fn lookup_finds(world: &Mutex<DirectoryWorld>, email: String, name: String) {
    let world = world.lock().expect("world lock");
    let user = block_on(world.directory().find_by_email(&email)).expect("user exists");
    assert_eq!(user.name(), name);
}

#[then("the last operation reported not found")]
fn last_operation_not_found(world: &Mutex<DirectoryWorld>) {
    let world = world.lock().expect("world lock");
    assert!(
        matches!(world.last_error, Some(UserDirectoryError::NotFound { .. })),
        "expected not found, got {:?}",
        world.last_error
    );
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Deleted identifiers are never reused"
)]
fn deleted_identifiers_are_never_reused(world: Mutex<DirectoryWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Updating a user keeps its identifier"
)]
fn updating_a_user_keeps_its_identifier(world: Mutex<DirectoryWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Email lookup returns the earliest match"
)]
fn email_lookup_returns_the_earliest_match(world: Mutex<DirectoryWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Deleting an unknown user reports not found"
)]
fn deleting_an_unknown_user_reports_not_found(world: Mutex<DirectoryWorld>) {
    drop(world);
}
