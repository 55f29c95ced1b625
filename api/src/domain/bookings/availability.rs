use uuid::Uuid;

use crate::domain::bookings::booking::{Booking, StayRange};

/// Returns the first booking that still holds `room_id` during `stay`.
pub fn first_conflict<'a, I>(existing: I, room_id: Uuid, stay: &StayRange) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    existing
        .into_iter()
        .find(|b| b.conflicts_with(room_id, stay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bookings::booking::BookingStatus;

    fn booking(room_id: Uuid, from: &str, to: &str, status: BookingStatus) -> Booking {
        let now = chrono::Utc::now();
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            resort_id: Uuid::new_v4(),
            room_id: Some(room_id),
            stay: StayRange::new(from.parse().unwrap(), to.parse().unwrap()).unwrap(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn picks_the_active_overlapping_booking() {
        let room = Uuid::new_v4();
        let cancelled = booking(room, "2024-07-01", "2024-07-05", BookingStatus::Cancelled);
        let adjacent = booking(room, "2024-07-05", "2024-07-07", BookingStatus::Confirmed);
        let pending = booking(room, "2024-07-02", "2024-07-04", BookingStatus::Pending);
        let all = vec![cancelled, adjacent, pending.clone()];

        let wanted = StayRange::new("2024-07-01".parse().unwrap(), "2024-07-05".parse().unwrap())
            .unwrap();
        let hit = first_conflict(&all, room, &wanted).unwrap();
        assert_eq!(hit.id, pending.id);
    }

    #[test]
    fn free_room_has_no_conflict() {
        let room = Uuid::new_v4();
        let all = vec![booking(room, "2024-07-01", "2024-07-05", BookingStatus::Confirmed)];
        let wanted = StayRange::new("2024-07-05".parse().unwrap(), "2024-07-06".parse().unwrap())
            .unwrap();
        assert!(first_conflict(&all, room, &wanted).is_none());
    }
}
