//! Biographical affidavit form entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted affidavit form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Form {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub archived: bool,
    pub full_name: String,
    pub other_names: String,
    pub has_changed_name: bool,
    pub social_security_number: String,
    pub social_security_date: String,
    pub social_security_country: String,
    pub passport_number: String,
    pub passport_date: String,
    pub passport_country: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub nationality: String,
    pub acquired_nationality: String,
    pub spouse_name: String,
    pub address: String,
    pub phone_number: String,
    pub fax_number: String,
    pub residential_email: String,
    pub created_at: DateTime<Utc>,
    pub version: i32,
}

/// Input for creating a [`Form`]; identifiers and timestamps are assigned
/// by the store.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NewForm {
    pub user_id: i64,
    pub status: String,
    #[serde(default)]
    pub archived: bool,
    pub full_name: String,
    #[serde(default)]
    pub other_names: String,
    #[serde(default)]
    pub has_changed_name: bool,
    #[serde(default)]
    pub social_security_number: String,
    #[serde(default)]
    pub social_security_date: String,
    #[serde(default)]
    pub social_security_country: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub passport_date: String,
    #[serde(default)]
    pub passport_country: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub nationality: String,
    #[serde(default)]
    pub acquired_nationality: String,
    #[serde(default)]
    pub spouse_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub fax_number: String,
    #[serde(default)]
    pub residential_email: String,
}
