use async_trait::async_trait;

use super::domain::{UserChanges, UserRecord};
use super::errors::UserError;

/// Repository abstraction over the user table.
///
/// Update and delete report rows affected instead of failing on a missing
/// id; absence is not an error at this level.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<UserRecord>, UserError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, UserError>;
    /// Names are not unique; login verifies every candidate.
    async fn find_by_name(&self, name: &str) -> Result<Vec<UserRecord>, UserError>;

    async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<UserRecord, UserError>;
    async fn update(&self, id: i32, changes: UserChanges) -> Result<u64, UserError>;
    async fn delete(&self, id: i32) -> Result<u64, UserError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<BTreeMap<i32, UserRecord>>,
        next_id: Mutex<i32>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn list(&self) -> Result<Vec<UserRecord>, UserError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, UserError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Vec<UserRecord>, UserError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().filter(|u| u.name == name).cloned().collect())
        }

        async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<UserRecord, UserError> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let user = UserRecord {
                id: *next,
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            };
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(user)
        }

        async fn update(&self, id: i32, changes: UserChanges) -> Result<u64, UserError> {
            if changes.is_empty() {
                return Ok(0);
            }
            let mut users = self.users.lock().unwrap();
            match users.get_mut(&id) {
                Some(u) => {
                    if let Some(name) = changes.name {
                        u.name = name;
                    }
                    if let Some(email) = changes.email {
                        u.email = email;
                    }
                    if let Some(hash) = changes.password_hash {
                        u.password_hash = hash;
                    }
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: i32) -> Result<u64, UserError> {
            let mut users = self.users.lock().unwrap();
            Ok(if users.remove(&id).is_some() { 1 } else { 0 })
        }
    }
}
