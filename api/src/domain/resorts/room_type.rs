use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::{ValidationError, patch, require_min, require_text};

/// Smallest accepted base price, in cents.
pub const MIN_BASE_PRICE_CENTS: i64 = 100;

#[derive(Debug, Clone)]
pub struct RoomType {
    pub id: Uuid,
    pub resort_id: Uuid,
    pub details: RoomTypeDetails,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub adults: i32,
    #[serde(default)]
    pub children: i32,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self {
            adults: 2,
            children: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BedConfiguration {
    #[serde(default)]
    pub single: i32,
    #[serde(default)]
    pub double: i32,
    #[serde(default)]
    pub queen: i32,
    #[serde(default)]
    pub king: i32,
}

impl BedConfiguration {
    pub fn total_beds(&self) -> i32 {
        self.single + self.double + self.queen + self.king
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StayPolicies {
    pub check_in_time: String,
    pub check_out_time: String,
    pub cancellation_hours: i32,
    pub extra_bed_allowed: bool,
    pub extra_bed_charge_cents: i64,
}

impl Default for StayPolicies {
    fn default() -> Self {
        Self {
            check_in_time: "14:00".into(),
            check_out_time: "11:00".into(),
            cancellation_hours: 24,
            extra_bed_allowed: false,
            extra_bed_charge_cents: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomTypeDetails {
    pub name: String,
    pub description: String,
    pub base_price_cents: i64,
    pub capacity: Occupancy,
    pub amenities: Vec<String>,
    pub size_sqft: i32,
    pub bed_configuration: BedConfiguration,
    pub is_active: bool,
    pub images: Vec<String>,
    pub policies: StayPolicies,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct RoomTypePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price_cents: Option<i64>,
    pub capacity: Option<Occupancy>,
    pub amenities: Option<Vec<String>>,
    pub size_sqft: Option<i32>,
    pub bed_configuration: Option<BedConfiguration>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
    pub policies: Option<StayPolicies>,
    pub display_order: Option<i32>,
}

impl RoomTypeDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, 100)?;
        require_text("description", &self.description, 10_000)?;
        require_min("base_price_cents", self.base_price_cents, MIN_BASE_PRICE_CENTS)?;
        if self.capacity.adults < 1 {
            return Err(ValidationError::new(
                "Room must accommodate at least 1 adult",
            ));
        }
        if self.capacity.children < 0 {
            return Err(ValidationError::new(
                "Children capacity cannot be negative",
            ));
        }
        require_min("size_sqft", self.size_sqft, 1)?;
        let beds = &self.bed_configuration;
        if [beds.single, beds.double, beds.queen, beds.king]
            .iter()
            .any(|n| *n < 0)
        {
            return Err(ValidationError::new("Bed counts cannot be negative"));
        }
        if beds.total_beds() == 0 {
            return Err(ValidationError::new(
                "At least one bed must be provided in the configuration",
            ));
        }
        require_min(
            "policies.cancellation_hours",
            self.policies.cancellation_hours,
            0,
        )?;
        require_min(
            "policies.extra_bed_charge_cents",
            self.policies.extra_bed_charge_cents,
            0,
        )?;
        require_min("display_order", self.display_order, 1)?;
        Ok(())
    }

    pub fn apply(&mut self, changes: RoomTypePatch) {
        patch(&mut self.name, changes.name);
        patch(&mut self.description, changes.description);
        patch(&mut self.base_price_cents, changes.base_price_cents);
        patch(&mut self.capacity, changes.capacity);
        patch(&mut self.amenities, changes.amenities);
        patch(&mut self.size_sqft, changes.size_sqft);
        patch(&mut self.bed_configuration, changes.bed_configuration);
        patch(&mut self.is_active, changes.is_active);
        patch(&mut self.images, changes.images);
        patch(&mut self.policies, changes.policies);
        patch(&mut self.display_order, changes.display_order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deluxe() -> RoomTypeDetails {
        RoomTypeDetails {
            name: "Deluxe".into(),
            description: "Sea view".into(),
            base_price_cents: 15_000,
            capacity: Occupancy::default(),
            amenities: vec!["wifi".into()],
            size_sqft: 320,
            bed_configuration: BedConfiguration {
                king: 1,
                ..Default::default()
            },
            is_active: true,
            images: vec![],
            policies: StayPolicies::default(),
            display_order: 1,
        }
    }

    #[test]
    fn valid_room_type_passes() {
        assert!(deluxe().validate().is_ok());
    }

    #[test]
    fn needs_at_least_one_bed() {
        let mut rt = deluxe();
        rt.bed_configuration = BedConfiguration::default();
        let err = rt.validate().unwrap_err();
        assert!(err.0.contains("At least one bed"));
    }

    #[test]
    fn needs_an_adult_and_a_real_price() {
        let mut rt = deluxe();
        rt.capacity.adults = 0;
        assert!(rt.validate().is_err());

        let mut rt = deluxe();
        rt.base_price_cents = 99;
        assert!(rt.validate().is_err());
    }

    #[test]
    fn policies_fill_missing_fields_with_defaults() {
        let p: StayPolicies = serde_json::from_str(r#"{"cancellation_hours": 48}"#).unwrap();
        assert_eq!(p.cancellation_hours, 48);
        assert_eq!(p.check_in_time, "14:00");
        assert!(!p.extra_bed_allowed);
    }

    #[test]
    fn patch_then_validate_catches_bad_merge() {
        let mut rt = deluxe();
        rt.apply(RoomTypePatch {
            display_order: Some(0),
            ..Default::default()
        });
        assert!(rt.validate().is_err());
    }
}
