//! Typed client for the GoCardless Pro REST API.
//!
//! The crate is split the same way the API is used:
//!
//! * [`config`] – environment selection and the immutable transport config.
//! * [`objects`] – wire types: the resource [`Envelope`](objects::Envelope),
//!   list pages, API errors and the customer / bank account / mandate /
//!   payment records.
//! * `client` – the HTTP client, gated behind the `client` cargo feature
//!   (enabled by default) so downstream crates that only need the shared
//!   types do not pull in `reqwest`.
//!
//! ```no_run
//! # #[cfg(feature = "client")]
//! # async fn run() -> Result<(), gocardless_sdk::client::ClientError> {
//! use gocardless_sdk::client::Client;
//! use gocardless_sdk::config::Environment;
//! use gocardless_sdk::objects::{Customer, Resource};
//!
//! let client = Client::new("sandbox_token", Environment::Sandbox);
//!
//! let mut customer = Customer::new(
//!     "user@example.com", "Frank", "Osborne", "27 Acer Road", "Apt 2", "London", "E8 3GX", "GB",
//! );
//! customer.add_metadata("salesforce_id", "ABCD1234");
//!
//! let created = client.customers().create(&customer).await?;
//! let page = client.customers().list().await?;
//! println!("{created} / {} customers on this page", page.items.len());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
