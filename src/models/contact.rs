use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Inbound contact form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub interested_in: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub preferred_contact_method: String,
    #[serde(default)]
    pub subscribe_newsletter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub interested_in: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub preferred_contact_method: String,
    #[serde(default)]
    pub subscribe_newsletter: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn from_request(request: ContactRequest) -> Self {
        Self {
            id: None,
            name: request.name,
            email: request.email,
            phone: request.phone,
            country: request.country,
            company: request.company,
            interested_in: request.interested_in,
            message: request.message,
            whatsapp_number: request.whatsapp_number,
            preferred_contact_method: request.preferred_contact_method,
            subscribe_newsletter: request.subscribe_newsletter,
            submitted_at: Utc::now(),
        }
    }
}
