use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, Row};
use uuid::Uuid;

use crate::application::ports::booking_repository::{
    BookingInsert, BookingListing, BookingRepository, StatusChange,
};
use crate::domain::bookings::booking::{Booking, BookingStatus, NewBooking, StayRange};
use crate::infrastructure::db::PgPool;

const BOOKING_COLUMNS: &str =
    "id, user_id, resort_id, room_id, check_in, check_out, status, created_at, updated_at";

const LISTING_SELECT: &str = r#"
    SELECT b.id, b.user_id, b.resort_id, b.room_id, b.check_in, b.check_out, b.status,
           b.created_at, b.updated_at,
           r.name AS resort_name, rm.room_number, u.name AS guest_name, u.email AS guest_email
    FROM bookings b
    JOIN resorts r ON r.id = b.resort_id
    JOIN users u ON u.id = b.user_id
    LEFT JOIN rooms rm ON rm.id = b.room_id
"#;

pub struct SqlxBookingRepository {
    pub pool: PgPool,
}

impl SqlxBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_booking(r: &PgRow) -> anyhow::Result<Booking> {
    let status: String = r.get("status");
    Ok(Booking {
        id: r.get("id"),
        user_id: r.get("user_id"),
        resort_id: r.get("resort_id"),
        room_id: r.get("room_id"),
        stay: StayRange::new(r.get("check_in"), r.get("check_out"))?,
        status: status.parse::<BookingStatus>()?,
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    })
}

fn map_listing(r: &PgRow) -> anyhow::Result<BookingListing> {
    Ok(BookingListing {
        booking: map_booking(r)?,
        resort_name: r.get("resort_name"),
        room_number: r.get("room_number"),
        guest_name: r.get("guest_name"),
        guest_email: r.get("guest_email"),
    })
}

/// Locks the room row, then looks for an active booking (other than
/// `exclude`) overlapping `stay`. Concurrent callers for the same room queue
/// on the lock until the holder commits.
async fn lock_room_and_find_clash(
    conn: &mut PgConnection,
    room_id: Uuid,
    stay: &StayRange,
    exclude: Option<Uuid>,
) -> anyhow::Result<Option<Uuid>> {
    sqlx::query("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
        .bind(room_id)
        .fetch_optional(&mut *conn)
        .await?;

    let clash = sqlx::query(
        r#"SELECT id FROM bookings
           WHERE room_id = $1
             AND status <> 'Cancelled'
             AND check_in < $3
             AND check_out > $2
             AND ($4::uuid IS NULL OR id <> $4)
           LIMIT 1"#,
    )
    .bind(room_id)
    .bind(stay.check_in())
    .bind(stay.check_out())
    .bind(exclude)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(clash.map(|row| row.get("id")))
}

#[async_trait]
impl BookingRepository for SqlxBookingRepository {
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<BookingListing>> {
        let rows = sqlx::query(&format!(
            "{LISTING_SELECT} WHERE b.user_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_listing).collect()
    }

    async fn list_for_resort(&self, resort_id: Uuid) -> anyhow::Result<Vec<BookingListing>> {
        let rows = sqlx::query(&format!(
            "{LISTING_SELECT} WHERE b.resort_id = $1 ORDER BY b.check_in DESC, b.created_at DESC"
        ))
        .bind(resort_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_listing).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Booking>> {
        let row = sqlx::query(&format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(map_booking).transpose()
    }

    async fn create_if_available(&self, booking: &NewBooking) -> anyhow::Result<BookingInsert> {
        let mut tx = self.pool.begin().await?;

        if let Some(room_id) = booking.room_id {
            if let Some(existing_id) =
                lock_room_and_find_clash(&mut *tx, room_id, &booking.stay, None).await?
            {
                tx.rollback().await?;
                return Ok(BookingInsert::Conflict { existing_id });
            }
        }

        let row = sqlx::query(&format!(
            r#"INSERT INTO bookings (user_id, resort_id, room_id, check_in, check_out, status)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {BOOKING_COLUMNS}"#
        ))
        .bind(booking.user_id)
        .bind(booking.resort_id)
        .bind(booking.room_id)
        .bind(booking.stay.check_in())
        .bind(booking.stay.check_out())
        .bind(BookingStatus::Pending.as_str())
        .fetch_one(&mut *tx)
        .await?;
        let created = map_booking(&row)?;
        tx.commit().await?;
        Ok(BookingInsert::Created(created))
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> anyhow::Result<Option<StatusChange>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = row.as_ref().map(map_booking).transpose()? else {
            return Ok(None);
        };

        if status.holds_room() && !current.status.holds_room() {
            if let Some(room_id) = current.room_id {
                if let Some(existing_id) =
                    lock_room_and_find_clash(&mut *tx, room_id, &current.stay, Some(id)).await?
                {
                    tx.rollback().await?;
                    return Ok(Some(StatusChange::Conflict { existing_id }));
                }
            }
        }

        let row = sqlx::query(&format!(
            r#"UPDATE bookings SET status = $2, updated_at = now()
               WHERE id = $1
               RETURNING {BOOKING_COLUMNS}"#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&mut *tx)
        .await?;
        let updated = row.as_ref().map(map_booking).transpose()?;
        tx.commit().await?;
        Ok(updated.map(StatusChange::Updated))
    }
}
