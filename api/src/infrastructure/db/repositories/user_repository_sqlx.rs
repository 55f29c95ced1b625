use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::UniqueWrite;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::domain::users::role::Role;
use crate::infrastructure::db::{PgPool, is_unique_violation};

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(r: &PgRow, with_hash: bool) -> anyhow::Result<UserRow> {
    let role: String = r.get("role");
    Ok(UserRow {
        id: r.get("id"),
        email: r.get("email"),
        name: r.get("name"),
        role: role.parse::<Role>()?,
        password_hash: if with_hash {
            r.try_get("password_hash").ok()
        } else {
            None
        },
        created_at: r.get("created_at"),
    })
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> anyhow::Result<UniqueWrite<UserRow>> {
        let inserted = sqlx::query(
            r#"INSERT INTO users (email, name, password_hash, role) VALUES ($1, $2, $3, $4)
               RETURNING id, email, name, role, created_at"#,
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await;
        match inserted {
            Ok(row) => Ok(UniqueWrite::Written(map_user(&row, false)?)),
            Err(e) if is_unique_violation(&e) => Ok(UniqueWrite::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT id, email, name, role, password_hash, created_at
               FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| map_user(&r, true)).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(r#"SELECT id, email, name, role, created_at FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| map_user(&r, false)).transpose()
    }
}
