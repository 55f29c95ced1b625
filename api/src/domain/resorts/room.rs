use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::{ValidationError, patch, require_min, require_text};

#[derive(Debug, Clone)]
pub struct Room {
    pub id: Uuid,
    pub resort_id: Uuid,
    pub details: RoomDetails,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(RoomStatus::Available),
            "Occupied" => Ok(RoomStatus::Occupied),
            "Maintenance" => Ok(RoomStatus::Maintenance),
            other => Err(ValidationError::new(format!("unknown room status: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomDetails {
    pub room_type_id: Option<Uuid>,
    pub name: String,
    pub room_number: String,
    pub size: String,
    pub price_per_night_cents: i64,
    pub capacity: i32,
    pub status: RoomStatus,
    pub amenities: Vec<String>,
    pub floor: i32,
}

#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub room_type_id: Option<Option<Uuid>>,
    pub name: Option<String>,
    pub room_number: Option<String>,
    pub size: Option<String>,
    pub price_per_night_cents: Option<i64>,
    pub capacity: Option<i32>,
    pub status: Option<RoomStatus>,
    pub amenities: Option<Vec<String>>,
    pub floor: Option<i32>,
}

impl RoomDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, 255)?;
        require_text("room_number", &self.room_number, 50)?;
        require_text("size", &self.size, 100)?;
        require_min("price_per_night_cents", self.price_per_night_cents, 0)?;
        if !(1..=20).contains(&self.capacity) {
            return Err(ValidationError::new("capacity must be between 1 and 20"));
        }
        Ok(())
    }

    pub fn apply(&mut self, changes: RoomPatch) {
        patch(&mut self.room_type_id, changes.room_type_id);
        patch(&mut self.name, changes.name);
        patch(&mut self.room_number, changes.room_number);
        patch(&mut self.size, changes.size);
        patch(&mut self.price_per_night_cents, changes.price_per_night_cents);
        patch(&mut self.capacity, changes.capacity);
        patch(&mut self.status, changes.status);
        patch(&mut self.amenities, changes.amenities);
        patch(&mut self.floor, changes.floor);
    }
}
