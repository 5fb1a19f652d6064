use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::user::{validate_email, validate_name};

use super::domain::{LoginInput, NewUser, UpdateUserInput, UserChanges, UserRecord};
use super::errors::UserError;
use super::password::{hash_password, verify_password};
use super::repository::UserRepository;

/// User business service independent of web framework
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List every stored user.
    pub async fn list(&self) -> Result<Vec<UserRecord>, UserError> {
        self.repo.list().await
    }

    /// Fetch a single user by id.
    ///
    /// When a requester id is supplied it must match the found record's id;
    /// a mismatch is an authorization failure, not a lookup failure.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32, requester: Option<i32>) -> Result<UserRecord, UserError> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(UserError::not_found)?;
        if let Some(req) = requester {
            if req != user.id {
                debug!(requester = req, "requester id mismatch");
                return Err(UserError::Unauthorized);
            }
        }
        Ok(user)
    }

    /// Authenticate by name and password.
    ///
    /// # Examples
    /// ```
    /// use service::user::{service::UserService, repository::mock::MockUserRepository};
    /// use service::user::domain::{NewUser, LoginInput};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// tokio_test::block_on(async {
    ///     svc.create(NewUser { name: "Bob".into(), email: "bob@example.com".into(), password: "Secret123".into() }).await.unwrap();
    ///     let user = svc.login(LoginInput { name: "Bob".into(), password: "Secret123".into() }).await.unwrap();
    ///     assert_eq!(user.email, "bob@example.com");
    /// });
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn login(&self, input: LoginInput) -> Result<UserRecord, UserError> {
        // Names are not unique; check every candidate so duplicate names
        // with different passwords behave like the legacy exact-match query.
        let candidates = self.repo.find_by_name(&input.name).await?;
        for user in candidates {
            if verify_password(&input.password, &user.password_hash) {
                info!(user_id = user.id, "user_login");
                return Ok(user);
            }
        }
        Err(UserError::bad_login())
    }

    /// Create a user; the store assigns the id. Email shape is deliberately
    /// not checked here, matching the legacy create path.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewUser) -> Result<UserRecord, UserError> {
        validate_name(&input.name)?;
        let hash = hash_password(&input.password)?;
        let created = self.repo.insert(&input.name, &input.email, &hash).await?;
        info!(user_id = created.id, "user_created");
        Ok(created)
    }

    /// Overwrite only the supplied fields. Returns rows affected; updating
    /// a missing id reports zero rather than failing.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UpdateUserInput) -> Result<u64, UserError> {
        if let Some(name) = &input.name {
            validate_name(name)?;
        }
        if let Some(email) = &input.email {
            validate_email(email)?;
        }
        let changes = UserChanges {
            name: input.name,
            email: input.email,
            password_hash: Some(hash_password(&input.password)?),
        };
        let affected = self.repo.update(id, changes).await?;
        info!(user_id = id, affected, "user_updated");
        Ok(affected)
    }

    /// Hard delete. Returns rows affected; zero when the id was absent.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<u64, UserError> {
        let affected = self.repo.delete(id).await?;
        info!(user_id = id, affected, "user_deleted");
        Ok(affected)
    }
}
