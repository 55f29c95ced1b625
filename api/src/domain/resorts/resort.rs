use uuid::Uuid;

use crate::domain::validation::{ValidationError, patch, require_email, require_text};

#[derive(Debug, Clone)]
pub struct Resort {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub details: ResortDetails,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Owner-editable fields of a resort.
#[derive(Debug, Clone, PartialEq)]
pub struct ResortDetails {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

// Option<Option<_>>: None => not provided; Some(None) => clear; Some(Some(v)) => set
#[derive(Debug, Clone, Default)]
pub struct ResortPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<Option<String>>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<Option<String>>,
}

impl ResortDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, 255)?;
        require_text("location", &self.location, 10_000)?;
        require_email("contact_email", &self.contact_email)?;
        if let Some(phone) = &self.contact_phone {
            if phone.chars().count() > 20 {
                return Err(ValidationError::new(
                    "contact_phone must be at most 20 characters",
                ));
            }
        }
        Ok(())
    }

    pub fn apply(&mut self, changes: ResortPatch) {
        patch(&mut self.name, changes.name);
        patch(&mut self.location, changes.location);
        patch(&mut self.description, changes.description);
        patch(&mut self.contact_email, changes.contact_email);
        patch(&mut self.contact_phone, changes.contact_phone);
    }
}

impl Resort {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> ResortDetails {
        ResortDetails {
            name: "Palm Cove".into(),
            location: "Goa".into(),
            description: Some("Beachfront".into()),
            contact_email: "stay@palmcove.in".into(),
            contact_phone: None,
        }
    }

    #[test]
    fn valid_details_pass() {
        assert!(details().validate().is_ok());
    }

    #[test]
    fn contact_email_is_required_and_checked() {
        let mut d = details();
        d.contact_email = "not-an-email".into();
        assert!(d.validate().is_err());
        d.contact_email = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn long_phone_is_rejected() {
        let mut d = details();
        d.contact_phone = Some("+91 12345 67890 12345".into());
        assert!(d.validate().is_err());
    }

    #[test]
    fn patch_keeps_missing_fields_and_clears_nulls() {
        let mut d = details();
        d.apply(ResortPatch {
            name: Some("Palm Cove Villas".into()),
            description: Some(None),
            ..Default::default()
        });
        assert_eq!(d.name, "Palm Cove Villas");
        assert_eq!(d.location, "Goa");
        assert_eq!(d.description, None);
        assert_eq!(d.contact_email, "stay@palmcove.in");
    }
}
