//! Customers hold the contact details of the people or companies that are
//! charged.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Metadata, Resource};

/// A customer record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, beginning with "CU".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Required unless a given and family name are provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Fixed timestamp recording when the customer was created.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// ISO 639-1 code used for notification emails. Defaults from the
    /// country code, or "en".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Address region, county or department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Personnummer, samordningsnummer or organisationsnummer. Required for
    /// SEK bank accounts and immutable once set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swedish_identity_number: Option<String>,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        email: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        address_line1: impl Into<String>,
        address_line2: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            given_name: Some(given_name.into()),
            family_name: Some(family_name.into()),
            address_line1: Some(address_line1.into()),
            address_line2: Some(address_line2.into()),
            city: Some(city.into()),
            postal_code: Some(postal_code.into()),
            country_code: Some(country_code.into()),
            ..Self::default()
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_json(self, f)
    }
}

/// Customer update body: every field accepted on create except the
/// identifier and creation timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swedish_identity_number: Option<String>,
}

impl From<&Customer> for CustomerUpdate {
    fn from(customer: &Customer) -> Self {
        let Customer {
            id: _,
            created_at: _,
            address_line1,
            address_line2,
            address_line3,
            city,
            company_name,
            country_code,
            email,
            family_name,
            given_name,
            language,
            metadata,
            postal_code,
            region,
            swedish_identity_number,
        } = customer.clone();
        Self {
            address_line1,
            address_line2,
            address_line3,
            city,
            company_name,
            country_code,
            email,
            family_name,
            given_name,
            language,
            metadata,
            postal_code,
            region,
            swedish_identity_number,
        }
    }
}

impl Resource for Customer {
    const ENDPOINT: &'static str = "customers";
    type Update = CustomerUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn update_payload(&self) -> CustomerUpdate {
        CustomerUpdate::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Envelope;
    use serde_json::json;
    use time::macros::datetime;

    fn frank() -> Customer {
        Customer::new(
            "user@example.com",
            "Frank",
            "Osborne",
            "27 Acer Road",
            "Apt 2",
            "London",
            "E8 3GX",
            "GB",
        )
    }

    #[test]
    fn test_new_customer_has_empty_metadata() {
        let mut customer = frank();
        assert!(customer.id.is_empty());
        assert!(customer.metadata.is_empty());

        customer.add_metadata("salesforce_id", "ABCD1234");
        assert_eq!(customer.metadata["salesforce_id"], "ABCD1234");
    }

    #[test]
    fn test_envelope_round_trip() {
        let mut customer = frank();
        customer.id = "CU123".to_string();
        customer.created_at = Some(datetime!(2014-05-08 17:01:06 UTC));
        customer.add_metadata("salesforce_id", "ABCD1234");

        let bytes = serde_json::to_vec(&Envelope::<Customer, _>::new(&customer)).unwrap();
        let decoded: Envelope<Customer> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded.into_inner(), customer);
    }

    #[test]
    fn test_decode_server_customer() {
        let body = json!({
            "customers": {
                "id": "CU123",
                "created_at": "2014-05-08T17:01:06.000Z",
                "email": "user@example.com",
                "given_name": "Frank",
                "family_name": "Osborne",
                "address_line1": "27 Acer Road",
                "address_line2": null,
                "country_code": "GB",
                "language": "en",
                "metadata": { "salesforce_id": "ABCD1234" }
            }
        });
        let customer = serde_json::from_value::<Envelope<Customer>>(body)
            .unwrap()
            .into_inner();
        assert_eq!(customer.id, "CU123");
        assert_eq!(customer.created_at, Some(datetime!(2014-05-08 17:01:06 UTC)));
        assert_eq!(customer.address_line2, None);
        assert_eq!(customer.metadata["salesforce_id"], "ABCD1234");
    }

    #[test]
    fn test_update_strips_id_and_created_at() {
        let mut customer = frank();
        customer.id = "CU123".to_string();
        customer.created_at = Some(datetime!(2014-05-08 17:01:06 UTC));
        customer.company_name = Some("Acme".to_string());

        let value = serde_json::to_value(customer.update_payload()).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["company_name"], "Acme");
        assert_eq!(value["given_name"], "Frank");
    }

    #[test]
    fn test_display_is_json() {
        let mut customer = Customer::default();
        customer.given_name = Some("Frank".to_string());
        assert_eq!(customer.to_string(), r#"{"given_name":"Frank"}"#);
    }
}
