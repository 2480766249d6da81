//! Wire types for the GoCardless Pro API.
//!
//! Every entity implements [`Resource`], which is all the generic CRUD
//! template in `client` needs to know about it: the collection name (used
//! both as the endpoint path and as the JSON envelope key) and the typed
//! payload its update call is allowed to send.

mod customer;
mod customer_bank_account;
mod date;
mod envelope;
mod error;
mod mandate;
mod money;
mod pagination;
mod payment;

pub use customer::{Customer, CustomerUpdate};
pub use customer_bank_account::{CustomerBankAccount, CustomerBankAccountLinks};
pub use envelope::{Envelope, ListEnvelope};
pub use error::{ApiError, ErrorDetail, ErrorEnvelope};
pub use mandate::{Mandate, MandateLinks, MandateStatus};
pub use money::centify;
pub use pagination::{Cursor, DEFAULT_LIMIT, ListParams, MAX_LIMIT, Meta};
pub use payment::{Payment, PaymentLinks, PaymentStatus};

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Key-value store of custom data attached to an entity.
///
/// The API accepts up to 3 keys, with key names up to 50 characters and
/// values up to 500 characters. The limits are enforced server-side only.
pub type Metadata = BTreeMap<String, String>;

/// Documented maximum number of metadata keys.
pub const METADATA_MAX_KEYS: usize = 3;
/// Documented maximum metadata key length.
pub const METADATA_MAX_KEY_LEN: usize = 50;
/// Documented maximum metadata value length.
pub const METADATA_MAX_VALUE_LEN: usize = 500;

/// A GoCardless entity reachable through the generic resource endpoints.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Plural collection name. It is the endpoint path relative to the API
    /// root and the key every single-entity payload is nested under.
    const ENDPOINT: &'static str;

    /// Body sent by an update call. Only the fields listed here ever leave
    /// the client on `PUT`.
    type Update: Serialize + Send + Sync;

    /// Server-assigned identifier, empty until the entity is created.
    fn id(&self) -> &str;

    fn metadata(&self) -> &Metadata;

    fn metadata_mut(&mut self) -> &mut Metadata;

    /// Payload for `PUT /<endpoint>/<id>`.
    fn update_payload(&self) -> Self::Update;

    /// Add or overwrite a metadata entry.
    fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata_mut().insert(key.into(), value.into());
    }
}

/// Update and action body for resources whose only mutable field is
/// `metadata` (bank accounts, mandates, payments).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataUpdate {
    pub metadata: Metadata,
}

impl MetadataUpdate {
    pub fn new(metadata: Metadata) -> Self {
        Self { metadata }
    }
}

/// Render `value` as compact JSON.
pub(crate) fn fmt_json<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&json)
}
