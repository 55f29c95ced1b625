use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::application::ports::room_type_repository::RoomTypeRepository;
use crate::domain::resorts::room_type::{
    BedConfiguration, Occupancy, RoomType, RoomTypeDetails, StayPolicies,
};
use crate::infrastructure::db::PgPool;

const ROOM_TYPE_COLUMNS: &str = "id, resort_id, name, description, base_price_cents, capacity, \
                                 amenities, size_sqft, bed_configuration, is_active, images, \
                                 policies, display_order, created_at, updated_at";

pub struct SqlxRoomTypeRepository {
    pub pool: PgPool,
}

impl SqlxRoomTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_room_type(r: &PgRow) -> RoomType {
    let capacity: Json<Occupancy> = r.get("capacity");
    let beds: Json<BedConfiguration> = r.get("bed_configuration");
    let policies: Json<StayPolicies> = r.get("policies");
    RoomType {
        id: r.get("id"),
        resort_id: r.get("resort_id"),
        details: RoomTypeDetails {
            name: r.get("name"),
            description: r.get("description"),
            base_price_cents: r.get("base_price_cents"),
            capacity: capacity.0,
            amenities: r.get("amenities"),
            size_sqft: r.get("size_sqft"),
            bed_configuration: beds.0,
            is_active: r.get("is_active"),
            images: r.get("images"),
            policies: policies.0,
            display_order: r.get("display_order"),
        },
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl RoomTypeRepository for SqlxRoomTypeRepository {
    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<RoomType>> {
        let rows = sqlx::query(&format!(
            "SELECT {ROOM_TYPE_COLUMNS} FROM room_types WHERE resort_id = $1
             ORDER BY display_order ASC, created_at ASC"
        ))
        .bind(resort_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_room_type).collect())
    }

    async fn list_for_resorts(&self, resort_ids: &[Uuid]) -> anyhow::Result<Vec<RoomType>> {
        if resort_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(&format!(
            "SELECT {ROOM_TYPE_COLUMNS} FROM room_types WHERE resort_id = ANY($1)
             ORDER BY display_order ASC, created_at ASC"
        ))
        .bind(resort_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_room_type).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<RoomType>> {
        let row = sqlx::query(&format!(
            "SELECT {ROOM_TYPE_COLUMNS} FROM room_types WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_room_type))
    }

    async fn create(
        &self,
        resort_id: Uuid,
        details: &RoomTypeDetails,
    ) -> anyhow::Result<RoomType> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO room_types
                 (resort_id, name, description, base_price_cents, capacity, amenities, size_sqft,
                  bed_configuration, is_active, images, policies, display_order)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
               RETURNING {ROOM_TYPE_COLUMNS}"#
        ))
        .bind(resort_id)
        .bind(&details.name)
        .bind(&details.description)
        .bind(details.base_price_cents)
        .bind(Json(&details.capacity))
        .bind(&details.amenities)
        .bind(details.size_sqft)
        .bind(Json(&details.bed_configuration))
        .bind(details.is_active)
        .bind(&details.images)
        .bind(Json(&details.policies))
        .bind(details.display_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_room_type(&row))
    }

    async fn update(
        &self,
        id: Uuid,
        details: &RoomTypeDetails,
    ) -> anyhow::Result<Option<RoomType>> {
        let row = sqlx::query(&format!(
            r#"UPDATE room_types
               SET name = $2, description = $3, base_price_cents = $4, capacity = $5,
                   amenities = $6, size_sqft = $7, bed_configuration = $8, is_active = $9,
                   images = $10, policies = $11, display_order = $12, updated_at = now()
               WHERE id = $1
               RETURNING {ROOM_TYPE_COLUMNS}"#
        ))
        .bind(id)
        .bind(&details.name)
        .bind(&details.description)
        .bind(details.base_price_cents)
        .bind(Json(&details.capacity))
        .bind(&details.amenities)
        .bind(details.size_sqft)
        .bind(Json(&details.bed_configuration))
        .bind(details.is_active)
        .bind(&details.images)
        .bind(Json(&details.policies))
        .bind(details.display_order)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_room_type))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM room_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
