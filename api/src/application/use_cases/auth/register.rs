use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::errors::ServiceError;
use crate::application::ports::UniqueWrite;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::domain::users::role::Role;
use crate::domain::validation::{ValidationError, require_email, require_text};

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Option<Role>,
}

impl RegisterRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, 255)?;
        require_email("email", &self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::new(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

fn email_taken() -> ServiceError {
    ServiceError::Conflict("Email already registered".into())
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<UserRow, ServiceError> {
        req.validate()?;
        let email = normalize_email(&req.email);
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(email_taken());
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        let role = req.role.unwrap_or_default();
        let user = match self
            .repo
            .create_user(&email, req.name.trim(), &hash, role)
            .await?
        {
            UniqueWrite::Written(user) => user,
            // Lost a race with a concurrent registration for the same email.
            UniqueWrite::Duplicate => return Err(email_taken()),
        };
        tracing::info!(user_id = %user.id, role = %user.role, "user_registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use uuid::Uuid;

    /// Email lookup misses, but the insert hits the unique index.
    struct RacedUsers;

    #[async_trait]
    impl UserRepository for RacedUsers {
        async fn create_user(
            &self,
            _email: &str,
            _name: &str,
            _password_hash: &str,
            _role: Role,
        ) -> anyhow::Result<UniqueWrite<UserRow>> {
            Ok(UniqueWrite::Duplicate)
        }

        async fn find_by_email(&self, _email: &str) -> anyhow::Result<Option<UserRow>> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: Uuid) -> anyhow::Result<Option<UserRow>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn duplicate_on_insert_is_a_conflict() {
        let req = RegisterRequest {
            email: "Ana@Example.com".into(),
            name: "Ana".into(),
            password: "secret-pass".into(),
            role: None,
        };
        let err = Register { repo: &RacedUsers }.execute(&req).await.unwrap_err();
        match err {
            ServiceError::Conflict(msg) => assert_eq!(msg, "Email already registered"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn emails_are_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
    }
}
