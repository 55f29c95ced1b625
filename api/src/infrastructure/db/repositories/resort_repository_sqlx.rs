use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::resort_repository::ResortRepository;
use crate::domain::resorts::resort::{Resort, ResortDetails};
use crate::infrastructure::db::PgPool;

const RESORT_COLUMNS: &str = "id, owner_id, name, location, description, contact_email, \
                              contact_phone, created_at, updated_at";

pub struct SqlxResortRepository {
    pub pool: PgPool,
}

impl SqlxResortRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_resort(r: &PgRow) -> Resort {
    Resort {
        id: r.get("id"),
        owner_id: r.get("owner_id"),
        details: ResortDetails {
            name: r.get("name"),
            location: r.get("location"),
            description: r.get("description"),
            contact_email: r.get("contact_email"),
            contact_phone: r.get("contact_phone"),
        },
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl ResortRepository for SqlxResortRepository {
    async fn list(&self) -> anyhow::Result<Vec<Resort>> {
        let rows = sqlx::query(&format!(
            "SELECT {RESORT_COLUMNS} FROM resorts ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_resort).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resort>> {
        let row = sqlx::query(&format!("SELECT {RESORT_COLUMNS} FROM resorts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(map_resort))
    }

    async fn create(&self, owner_id: Uuid, details: &ResortDetails) -> anyhow::Result<Resort> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO resorts (owner_id, name, location, description, contact_email, contact_phone)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {RESORT_COLUMNS}"#
        ))
        .bind(owner_id)
        .bind(&details.name)
        .bind(&details.location)
        .bind(&details.description)
        .bind(&details.contact_email)
        .bind(&details.contact_phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_resort(&row))
    }

    async fn update(&self, id: Uuid, details: &ResortDetails) -> anyhow::Result<Option<Resort>> {
        let row = sqlx::query(&format!(
            r#"UPDATE resorts
               SET name = $2, location = $3, description = $4, contact_email = $5,
                   contact_phone = $6, updated_at = now()
               WHERE id = $1
               RETURNING {RESORT_COLUMNS}"#
        ))
        .bind(id)
        .bind(&details.name)
        .bind(&details.location)
        .bind(&details.description)
        .bind(&details.contact_email)
        .bind(&details.contact_phone)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_resort))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM resorts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
