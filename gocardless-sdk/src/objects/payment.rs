//! Payments collect money from a customer against a Direct Debit mandate.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::{Metadata, MetadataUpdate, Resource};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier, beginning with "PM".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Amount in minor units (pence, cents, öre, øre). See
    /// [`centify`](super::centify).
    #[serde(default)]
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<i64>,
    /// Amount deducted as the OAuth app's fee, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_fee: Option<i64>,
    /// Date the payment should be collected. As soon as possible when unset.
    #[serde(
        default,
        with = "super::date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub charge_date: Option<Date>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Shown on the customer's bank statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(default)]
    pub links: PaymentLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandate: Option<String>,
}

/// Remote state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    PendingCustomerApproval,
    PendingSubmission,
    Submitted,
    Confirmed,
    PaidOut,
    Cancelled,
    CustomerApprovalDenied,
    Failed,
    ChargedBack,
    /// A status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::PendingCustomerApproval => "pending_customer_approval",
            PaymentStatus::PendingSubmission => "pending_submission",
            PaymentStatus::Submitted => "submitted",
            PaymentStatus::Confirmed => "confirmed",
            PaymentStatus::PaidOut => "paid_out",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::CustomerApprovalDenied => "customer_approval_denied",
            PaymentStatus::Failed => "failed",
            PaymentStatus::ChargedBack => "charged_back",
            PaymentStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

impl Payment {
    /// A payment of `amount` minor units collected against a mandate.
    pub fn new(amount: i64, currency: impl Into<String>, mandate_id: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            links: PaymentLinks {
                mandate: Some(mandate_id.into()),
                ..PaymentLinks::default()
            },
            ..Self::default()
        }
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_json(self, f)
    }
}

impl Resource for Payment {
    const ENDPOINT: &'static str = "payments";
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
