use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::application::use_cases::auth::register::normalize_email;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    /// `Ok(None)` covers both an unknown email and a wrong password.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<UserRow>> {
        let row = match self.repo.find_by_email(&normalize_email(&req.email)).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        let Some(hash) = row.password_hash.as_deref() else {
            return Ok(None);
        };
        let verified = {
            let parsed = PasswordHash::new(hash).map_err(|e| anyhow::anyhow!(e.to_string()))?;
            Argon2::default()
                .verify_password(req.password.as_bytes(), &parsed)
                .is_ok()
        };
        if verified {
            Ok(Some(UserRow {
                password_hash: None,
                ..row
            }))
        } else {
            Ok(None)
        }
    }
}
