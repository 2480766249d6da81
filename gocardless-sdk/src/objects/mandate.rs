//! Mandates represent the Direct Debit authority granted by a customer.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{Metadata, MetadataUpdate, Resource};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mandate {
    /// Unique identifier, beginning with "MD".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Earliest date a newly created payment against this mandate could be
    /// charged.
    #[serde(
        default,
        with = "super::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_possible_charge_date: Option<Date>,
    /// Whether payments and subscriptions under this mandate need approval
    /// by automated email before being processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments_require_approval: Option<bool>,
    /// Unique reference. Generated to fit the scheme's rules when left
    /// blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Direct Debit scheme the mandate and its payments are submitted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MandateStatus>,
    #[serde(default)]
    pub links: MandateLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandateLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_bank_account: Option<String>,
    /// Set when the mandate was replaced, e.g. after a bank switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_mandate: Option<String>,
}

/// Remote state of a mandate. The client only mirrors what the server
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandateStatus {
    PendingCustomerApproval,
    PendingSubmission,
    Submitted,
    Active,
    Failed,
    Cancelled,
    Expired,
    Consumed,
    Blocked,
    SuspendedByPayer,
    /// A status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for MandateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MandateStatus::PendingCustomerApproval => "pending_customer_approval",
            MandateStatus::PendingSubmission => "pending_submission",
            MandateStatus::Submitted => "submitted",
            MandateStatus::Active => "active",
            MandateStatus::Failed => "failed",
            MandateStatus::Cancelled => "cancelled",
            MandateStatus::Expired => "expired",
            MandateStatus::Consumed => "consumed",
            MandateStatus::Blocked => "blocked",
            MandateStatus::SuspendedByPayer => "suspended_by_payer",
            MandateStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

impl Mandate {
    /// A mandate against an existing customer bank account.
    pub fn new(customer_bank_account_id: impl Into<String>) -> Self {
        Self {
            links: MandateLinks {
                customer_bank_account: Some(customer_bank_account_id.into()),
                ..MandateLinks::default()
            },
            ..Self::default()
        }
    }
}

impl fmt::Display for Mandate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_json(self, f)
    }
}

impl Resource for Mandate {
    const ENDPOINT: &'static str = "mandates";
    type Update = MetadataUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn update_payload(&self) -> MetadataUpdate {
        MetadataUpdate::new(self.metadata.clone())
    }
}
