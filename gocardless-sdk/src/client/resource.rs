//! Generic CRUD template shared by every entity endpoint.
//!
//! Each [`Resource`] gets the same four calls against its collection:
//!
//! | call              | request                      | response             |
//! |-------------------|------------------------------|----------------------|
//! | [`create`]        | `POST /<endpoint>`           | `Envelope<R>`        |
//! | [`list`]          | `GET /<endpoint>`            | `ListEnvelope<R>`    |
//! | [`get`]           | `GET /<endpoint>/<id>`       | `Envelope<R>`        |
//! | [`update`]        | `PUT /<endpoint>/<id>`       | `Envelope<R>`        |
//!
//! Mandates and payments add state-transition actions posted to
//! `/<endpoint>/<id>/actions/<action>`. The client does not track those
//! state machines; it returns whatever the server reports.
//!
//! [`create`]: ResourceApi::create
//! [`list`]: ResourceApi::list
//! [`get`]: ResourceApi::get
//! [`update`]: ResourceApi::update

use std::marker::PhantomData;

use reqwest::Method;

use super::{Client, ClientError};
use crate::objects::{
    Envelope, ListEnvelope, ListParams, Mandate, Metadata, MetadataUpdate, Payment, Resource,
};

/// Endpoint access for one resource type, borrowed from a [`Client`].
#[derive(Debug)]
pub struct ResourceApi<'c, R> {
    client: &'c Client,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceApi<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceApi<'_, R> {}

impl<'c, R: Resource> ResourceApi<'c, R> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    /// `POST /<endpoint>` – create `resource` and return the server's copy,
    /// with its identifier and computed fields filled in.
    pub async fn create(&self, resource: &R) -> Result<R, ClientError> {
        let body = Envelope::<R, &R>::new(resource);
        let created: Envelope<R> = self
            .client
            .call(Method::POST, R::ENDPOINT, Some(&body))
            .await?;
        Ok(created.into_inner())
    }

    /// `GET /<endpoint>` – the first page with the server's default size.
    pub async fn list(&self) -> Result<ListEnvelope<R>, ClientError> {
        self.client
            .call(Method::GET, R::ENDPOINT, None::<&()>)
            .await
    }

    /// `GET /<endpoint>?before=&after=&limit=` – a specific page.
    pub async fn list_page(&self, params: &ListParams) -> Result<ListEnvelope<R>, ClientError> {
        self.client
            .call_with_query(R::ENDPOINT, &params.to_query())
            .await
    }

    /// `GET /<endpoint>/<id>`.
    pub async fn get(&self, id: &str) -> Result<R, ClientError> {
        let found: Envelope<R> = self
            .client
            .call(Method::GET, &member_path::<R>(id), None::<&()>)
            .await?;
        Ok(found.into_inner())
    }

    /// `PUT /<endpoint>/<id>` with the resource's update payload.
    ///
    /// Customers send every mutable field; bank accounts, mandates and
    /// payments send only their metadata. The identifier and creation
    /// timestamp are never part of the body.
    pub async fn update(&self, resource: &R) -> Result<R, ClientError> {
        let id = require_id(resource)?;
        let body = Envelope::<R, R::Update>::new(resource.update_payload());
        let updated: Envelope<R> = self
            .client
            .call(Method::PUT, &member_path::<R>(id), Some(&body))
            .await?;
        Ok(updated.into_inner())
    }

    /// `POST /<endpoint>/<id>/actions/<action>`.
    ///
    /// The body is the metadata-only envelope when `metadata` is given and
    /// empty otherwise.
    async fn action(
        &self,
        id: &str,
        action: &str,
        metadata: Option<&Metadata>,
    ) -> Result<R, ClientError> {
        let path = format!("{}/actions/{action}", member_path::<R>(id));
        let body = metadata.map(|metadata| {
            Envelope::<R, MetadataUpdate>::new(MetadataUpdate::new(metadata.clone()))
        });
        let updated: Envelope<R> = self
            .client
            .call(Method::POST, &path, body.as_ref())
            .await?;
        Ok(updated.into_inner())
    }
}

impl ResourceApi<'_, Mandate> {
    /// Immediately cancel a mandate and all its cancellable payments.
    pub async fn cancel(&self, id: &str, metadata: Option<&Metadata>) -> Result<Mandate, ClientError> {
        self.action(id, "cancel", metadata).await
    }

    /// Reinstate a cancelled or expired mandate.
    pub async fn reinstate(
        &self,
        id: &str,
        metadata: Option<&Metadata>,
    ) -> Result<Mandate, ClientError> {
        self.action(id, "reinstate", metadata).await
    }
}

impl ResourceApi<'_, Payment> {
    /// Cancel a payment that has not been submitted yet.
    pub async fn cancel(&self, id: &str, metadata: Option<&Metadata>) -> Result<Payment, ClientError> {
        self.action(id, "cancel", metadata).await
    }

    /// Retry a failed payment, if its mandate is still active.
    pub async fn retry(&self, id: &str, metadata: Option<&Metadata>) -> Result<Payment, ClientError> {
        self.action(id, "retry", metadata).await
    }
}

fn member_path<R: Resource>(id: &str) -> String {
    format!("{}/{}", R::ENDPOINT, urlencoding::encode(id))
}

fn require_id<R: Resource>(resource: &R) -> Result<&str, ClientError> {
    match resource.id() {
        "" => Err(ClientError::MissingId(R::ENDPOINT)),
        id => Ok(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Customer, CustomerBankAccount};

    #[test]
    fn test_member_paths() {
        assert_eq!(member_path::<Customer>("CU123"), "customers/CU123");
        assert_eq!(
            member_path::<CustomerBankAccount>("BA 1/2"),
            "customer_bank_accounts/BA%201%2F2"
        );
    }

    #[test]
    fn test_require_id() {
        let mut payment = Payment::new(100, "GBP", "MD1");
        assert!(matches!(
            require_id(&payment),
            Err(ClientError::MissingId("payments"))
        ));

        payment.id = "PM1".to_string();
        assert_eq!(require_id(&payment).unwrap(), "PM1");
    }
}
