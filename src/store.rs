use std::fmt;
use std::future::Future;
use std::pin::Pin;

use gloo_console::error;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::FunnelConfig;
use crate::state::{FormData, UserType};

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct NewLead {
    pub name: String,
    pub whatsapp: String,
    pub instagram: String,
    pub user_type: &'static str,
    pub is_founder: bool,
}

impl NewLead {
    pub fn from_form(form: &FormData, user_type: UserType) -> Self {
        Self {
            name: form.name.clone(),
            whatsapp: form.whatsapp.clone(),
            instagram: form.instagram.clone(),
            user_type: user_type.lead_value(),
            is_founder: true,
        }
    }
}

// Echo of the inserted row. Never read back after submission.
#[derive(Deserialize, Clone, Debug)]
pub struct LeadRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub whatsapp: String,
    pub instagram: String,
    pub user_type: String,
    pub is_founder: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<NewLead> for LeadRecord {
    fn from(lead: NewLead) -> Self {
        Self {
            id: None,
            name: lead.name,
            whatsapp: lead.whatsapp,
            instagram: lead.instagram,
            user_type: lead.user_type.to_string(),
            is_founder: lead.is_founder,
            created_at: None,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmitError {
    // The insert call completed and the store answered with an error.
    StoreRejected { status: u16, message: String },
    // The call itself never completed (network, DNS, timeout).
    TransportFailure(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::StoreRejected { status, message } => {
                write!(f, "lead store rejected the insert ({status}): {message}")
            }
            SubmitError::TransportFailure(reason) => {
                write!(f, "lead store was unreachable: {reason}")
            }
        }
    }
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<LeadRecord, SubmitError>>>>;

// The one seam between the funnel and the outside world.
pub trait LeadStore {
    fn submit_lead(&self, lead: NewLead) -> SubmitFuture;
}

pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(config: &FunnelConfig) -> Self {
        Self {
            base_url: config.store_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    async fn insert(
        base_url: String,
        anon_key: String,
        lead: NewLead,
    ) -> Result<LeadRecord, SubmitError> {
        let response = Request::post(&format!("{base_url}/rest/v1/user_profiles"))
            .header("apikey", &anon_key)
            .header("Authorization", &format!("Bearer {anon_key}"))
            .header("Prefer", "return=representation")
            .json(&[lead.clone()])
            .map_err(|e| SubmitError::TransportFailure(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::TransportFailure(e.to_string()))?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            error!("lead store error body:", message.clone());
            return Err(SubmitError::StoreRejected {
                status: response.status(),
                message,
            });
        }

        // The store echoes the inserted rows as an array. The row is in the
        // table either way, so an unusable echo still counts as a success.
        match response.json::<Vec<LeadRecord>>().await {
            Ok(mut rows) if !rows.is_empty() => Ok(rows.remove(0)),
            Ok(_) | Err(_) => Ok(LeadRecord::from(lead)),
        }
    }
}

impl LeadStore for SupabaseStore {
    fn submit_lead(&self, lead: NewLead) -> SubmitFuture {
        let base_url = self.base_url.clone();
        let anon_key = self.anon_key.clone();
        Box::pin(Self::insert(base_url, anon_key, lead))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> FormData {
        FormData {
            name: "Ana Souza".into(),
            whatsapp: "+55 11 99999-0000".into(),
            instagram: "ana.creates".into(),
        }
    }

    #[test]
    fn lead_row_carries_the_wire_fields() {
        let lead = NewLead::from_form(&form(), UserType::Creator);
        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            json!({
                "name": "Ana Souza",
                "whatsapp": "+55 11 99999-0000",
                "instagram": "ana.creates",
                "user_type": "creator",
                "is_founder": true,
            })
        );
    }

    #[test]
    fn unset_profile_defaults_to_creator_on_the_wire() {
        let lead = NewLead::from_form(&form(), UserType::Unset);
        assert_eq!(lead.user_type, "creator");
        assert!(lead.is_founder);
    }

    #[test]
    fn record_echo_tolerates_missing_server_columns() {
        let record: LeadRecord = serde_json::from_value(json!({
            "name": "Ana Souza",
            "whatsapp": "+55 11 99999-0000",
            "instagram": "ana.creates",
            "user_type": "creator",
            "is_founder": true,
        }))
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn the_two_failure_modes_stay_distinguishable() {
        let rejected = SubmitError::StoreRejected {
            status: 409,
            message: "duplicate key value".into(),
        };
        let transport = SubmitError::TransportFailure("connection refused".into());
        assert!(rejected.to_string().contains("409"));
        assert!(transport.to_string().contains("unreachable"));
        assert_ne!(rejected, transport);
    }
}
