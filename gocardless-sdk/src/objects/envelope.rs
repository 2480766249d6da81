//! Single-key JSON wrappers around entity payloads.
//!
//! The API nests every single-entity body, inbound and outbound, under the
//! resource's collection name:
//!
//! ```text
//! {"customers": {"given_name": "Frank", ...}}
//! ```
//!
//! List responses carry the items under the same key next to a `meta`
//! object with the pagination cursors.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Resource;
use super::pagination::Meta;

const META_KEY: &str = "meta";

/// `{"<R::ENDPOINT>": P}`.
///
/// `P` defaults to the entity itself; update and action bodies use the
/// resource's narrower payload type while keeping the entity's key.
pub struct Envelope<R, P = R> {
    inner: P,
    resource: PhantomData<fn() -> R>,
}

impl<R: Resource, P> Envelope<R, P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            resource: PhantomData,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<R, P: fmt::Debug> fmt::Debug for Envelope<R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Envelope").field(&self.inner).finish()
    }
}

impl<R: Resource, P: Serialize> Serialize for Envelope<R, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(R::ENDPOINT, &self.inner)?;
        map.end()
    }
}

impl<'de, R: Resource, P: Deserialize<'de>> Deserialize<'de> for Envelope<R, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EnvelopeVisitor(PhantomData))
    }
}

struct EnvelopeVisitor<R, P>(PhantomData<fn() -> (R, P)>);

impl<'de, R: Resource, P: Deserialize<'de>> Visitor<'de> for EnvelopeVisitor<R, P> {
    type Value = Envelope<R, P>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object keyed by `{}`", R::ENDPOINT)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut inner = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == R::ENDPOINT {
                if inner.is_some() {
                    return Err(de::Error::duplicate_field(R::ENDPOINT));
                }
                inner = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        let inner = inner.ok_or_else(|| de::Error::missing_field(R::ENDPOINT))?;
        Ok(Envelope::new(inner))
    }
}

/// One page of a list endpoint: `{"<R::ENDPOINT>": [...], "meta": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEnvelope<R> {
    pub items: Vec<R>,
    pub meta: Meta,
}

impl<R: Resource> Serialize for ListEnvelope<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(R::ENDPOINT, &self.items)?;
        map.serialize_entry(META_KEY, &self.meta)?;
        map.end()
    }
}

impl<'de, R: Resource> Deserialize<'de> for ListEnvelope<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ListEnvelopeVisitor(PhantomData))
    }
}

struct ListEnvelopeVisitor<R>(PhantomData<fn() -> R>);

impl<'de, R: Resource> Visitor<'de> for ListEnvelopeVisitor<R> {
    type Value = ListEnvelope<R>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a list of `{}` with pagination meta", R::ENDPOINT)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut items = None;
        let mut meta = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == R::ENDPOINT {
                if items.is_some() {
                    return Err(de::Error::duplicate_field(R::ENDPOINT));
                }
                items = Some(map.next_value()?);
            } else if key == META_KEY {
                if meta.is_some() {
                    return Err(de::Error::duplicate_field(META_KEY));
                }
                meta = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(ListEnvelope {
            items: items.ok_or_else(|| de::Error::missing_field(R::ENDPOINT))?,
            meta: meta.unwrap_or_default(),
        })
    }
}
