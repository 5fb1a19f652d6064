use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// The single `user` table. No relations, no timestamps, hard delete only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Argon2 hash, never serialized out.
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Reject empty or whitespace-only names.
pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.len() > 100 {
        return Err(ModelError::Validation("name too long (<=100)".into()));
    }
    Ok(())
}

/// Minimal email shape check: local part, one `@`, non-empty domain with a
/// dot. Applied on update only; the legacy create path never validated the
/// address and that behavior is kept.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    if email.len() > 100 {
        return Err(ModelError::Validation("email too long (<=100)".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_blank() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Bob").is_ok());
    }

    #[test]
    fn email_shape_checks() {
        assert!(validate_email("bob@example.com").is_ok());
        assert!(validate_email("bob").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("bob@nodot").is_err());
    }

    #[test]
    fn password_is_not_serialized() {
        let m = Model {
            id: 1,
            name: "Bob".into(),
            email: "bob@example.com".into(),
            password: "$argon2id$...".into(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "Bob");
    }
}
