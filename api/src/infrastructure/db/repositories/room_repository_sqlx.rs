use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::UniqueWrite;
use crate::application::ports::room_repository::RoomRepository;
use crate::domain::resorts::room::{Room, RoomDetails, RoomStatus};
use crate::infrastructure::db::{PgPool, is_unique_violation};

const ROOM_COLUMNS: &str = "id, resort_id, room_type_id, name, room_number, size, \
                            price_per_night_cents, capacity, status, amenities, floor, \
                            created_at, updated_at";

pub struct SqlxRoomRepository {
    pub pool: PgPool,
}

impl SqlxRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_room(r: &PgRow) -> anyhow::Result<Room> {
    let status: String = r.get("status");
    Ok(Room {
        id: r.get("id"),
        resort_id: r.get("resort_id"),
        details: RoomDetails {
            room_type_id: r.get("room_type_id"),
            name: r.get("name"),
            room_number: r.get("room_number"),
            size: r.get("size"),
            price_per_night_cents: r.get("price_per_night_cents"),
            capacity: r.get("capacity"),
            status: status.parse::<RoomStatus>()?,
            amenities: r.get("amenities"),
            floor: r.get("floor"),
        },
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    })
}

#[async_trait]
impl RoomRepository for SqlxRoomRepository {
    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<Room>> {
        let rows = sqlx::query(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE resort_id = $1 ORDER BY floor ASC, room_number ASC"
        ))
        .bind(resort_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_room).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Room>> {
        let row = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(map_room).transpose()
    }

    async fn find_by_number(
        &self,
        resort_id: Uuid,
        room_number: &str,
    ) -> anyhow::Result<Option<Room>> {
        let row = sqlx::query(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE resort_id = $1 AND room_number = $2"
        ))
        .bind(resort_id)
        .bind(room_number)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_room).transpose()
    }

    async fn create(
        &self,
        resort_id: Uuid,
        details: &RoomDetails,
    ) -> anyhow::Result<UniqueWrite<Room>> {
        let inserted = sqlx::query(&format!(
            r#"INSERT INTO rooms
                 (resort_id, room_type_id, name, room_number, size, price_per_night_cents,
                  capacity, status, amenities, floor)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
               RETURNING {ROOM_COLUMNS}"#
        ))
        .bind(resort_id)
        .bind(details.room_type_id)
        .bind(&details.name)
        .bind(details.room_number.trim())
        .bind(&details.size)
        .bind(details.price_per_night_cents)
        .bind(details.capacity)
        .bind(details.status.as_str())
        .bind(&details.amenities)
        .bind(details.floor)
        .fetch_one(&self.pool)
        .await;
        match inserted {
            Ok(row) => Ok(UniqueWrite::Written(map_room(&row)?)),
            Err(e) if is_unique_violation(&e) => Ok(UniqueWrite::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(
        &self,
        id: Uuid,
        details: &RoomDetails,
    ) -> anyhow::Result<Option<UniqueWrite<Room>>> {
        let updated = sqlx::query(&format!(
            r#"UPDATE rooms
               SET room_type_id = $2, name = $3, room_number = $4, size = $5,
                   price_per_night_cents = $6, capacity = $7, status = $8, amenities = $9,
                   floor = $10, updated_at = now()
               WHERE id = $1
               RETURNING {ROOM_COLUMNS}"#
        ))
        .bind(id)
        .bind(details.room_type_id)
        .bind(&details.name)
        .bind(details.room_number.trim())
        .bind(&details.size)
        .bind(details.price_per_night_cents)
        .bind(details.capacity)
        .bind(details.status.as_str())
        .bind(&details.amenities)
        .bind(details.floor)
        .fetch_optional(&self.pool)
        .await;
        match updated {
            Ok(row) => row
                .as_ref()
                .map(|r| map_room(r).map(UniqueWrite::Written))
                .transpose(),
            Err(e) if is_unique_violation(&e) => Ok(Some(UniqueWrite::Duplicate)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
