//! Service layer for get-or-create user resolution.

use crate::directory::{
    domain::{EmailAddress, User},
    ports::{UserRepository, UserRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;

/// Get-or-create user resolution service.
///
/// Membership and task services resolve every email-bearing reference
/// through this service, so a person becomes a user record the first time
/// their address appears anywhere.
#[derive(Debug)]
pub struct UserDirectoryService<U, C>
where
    U: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<U>,
    clock: Arc<C>,
}

impl<U, C> Clone for UserDirectoryService<U, C>
where
    U: UserRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<U, C> UserDirectoryService<U, C>
where
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<U>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Resolves a user by email, creating the record when absent.
    ///
    /// A repeat call returns the stored record unchanged; in particular the
    /// stored `full_name` is never overwritten by a later value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::directory::ports::UserRepositoryError`] when lookup
    /// or insert fails. A concurrent insert of the same address surfaces as
    /// [`crate::directory::ports::UserRepositoryError::DuplicateEmail`].
    pub async fn get_or_create(
        &self,
        email: &EmailAddress,
        full_name: Option<&str>,
    ) -> UserRepositoryResult<User> {
        if let Some(existing) = self.repository.find_by_email(email).await? {
            return Ok(existing);
        }

        let user = User::new(email.clone(), full_name.map(str::to_owned), &*self.clock);
        self.repository.store(&user).await?;
        Ok(user)
    }

    /// Finds a user by email without creating one.
    ///
    /// Returns `Ok(None)` when no user has the given address.
    ///
    /// # Errors
    ///
    /// Returns [`crate::directory::ports::UserRepositoryError`] when
    /// persistence lookup fails.
    pub async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        self.repository.find_by_email(email).await
    }
}
