//! Customer bank accounts hold the bank details of a customer. They always
//! belong to a customer and may back several mandates.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Metadata, MetadataUpdate, Resource};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBankAccount {
    /// Unique identifier, beginning with "BA".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Name of the account holder as known by the bank. Transliterated,
    /// upcased and truncated to 18 characters by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    /// Alternatively provide an `iban`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Last two digits of the account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number_ending: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    /// Defaults to the national currency of `country_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Whether the account can be used for new mandates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(default)]
    pub links: CustomerBankAccountLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBankAccountLinks {
    /// Customer who owns the bank account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Token to use in place of the bank account parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_bank_account_token: Option<String>,
}

impl CustomerBankAccount {
    pub fn new(
        account_number: impl Into<String>,
        account_holder_name: impl Into<String>,
        branch_code: impl Into<String>,
        country_code: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            account_number: Some(account_number.into()),
            account_holder_name: Some(account_holder_name.into()),
            branch_code: Some(branch_code.into()),
            country_code: Some(country_code.into()),
            links: CustomerBankAccountLinks {
                customer: Some(customer_id.into()),
                customer_bank_account_token: None,
            },
            ..Self::default()
        }
    }
}

impl fmt::Display for CustomerBankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_json(self, f)
    }
}

impl Resource for CustomerBankAccount {
    const ENDPOINT: &'static str = "customer_bank_accounts";
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
