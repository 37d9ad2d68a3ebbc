use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Intensity of care a client requires
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CareLevel {
    #[default]
    Companion,
    Personal,
    Alzheimers,
    LiveIn,
    Respite,
}

impl CareLevel {
    pub const ALL: [CareLevel; 5] = [
        Self::Companion,
        Self::Personal,
        Self::Alzheimers,
        Self::LiveIn,
        Self::Respite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Companion => "Companion Care",
            Self::Personal => "Personal Care",
            Self::Alzheimers => "Alzheimer's Care",
            Self::LiveIn => "Live-In Care",
            Self::Respite => "Respite Care",
        }
    }

    /// Wire value, as used in form selects
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Companion => "companion",
            Self::Personal => "personal",
            Self::Alzheimers => "alzheimers",
            Self::LiveIn => "livein",
            Self::Respite => "respite",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ClientDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub care_level: CareLevel,
    pub medical_conditions: Option<String>,
    pub medications: Option<String>,
    pub care_notes: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Client record as entered by an admin; `care_level` defaults to companion care
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ClientFormDto {
    #[serde(default)]
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub care_level: CareLevel,
    pub medical_conditions: Option<String>,
    pub medications: Option<String>,
    pub care_notes: Option<String>,
}
