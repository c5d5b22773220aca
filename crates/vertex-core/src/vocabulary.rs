//! # Vocabulary
//!
//! The seven semantic keys every vertical labels in its own words. A
//! garage calls a service a "Réparation", a law firm calls a client a
//! "Dossier client"; the application code only ever asks for
//! [`ServiceKey::Service`] or [`ServiceKey::Client`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VertexError;

/// Semantic vocabulary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKey {
    /// What the tenant sells or performs.
    Service,
    /// A reservation record.
    Booking,
    /// The customer.
    Client,
    /// A scheduled time slot.
    Appointment,
    /// A bookable resource (table, chair, bay, room).
    Resource,
    /// The people doing the work.
    Staff,
    /// Where the work happens.
    Location,
}

/// Number of vocabulary keys.
pub const SERVICE_KEY_COUNT: usize = 7;

impl ServiceKey {
    /// All keys in canonical order.
    pub fn all() -> &'static [ServiceKey] {
        &[
            Self::Service,
            Self::Booking,
            Self::Client,
            Self::Appointment,
            Self::Resource,
            Self::Staff,
            Self::Location,
        ]
    }

    /// Lowercase identifier. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Booking => "booking",
            Self::Client => "client",
            Self::Appointment => "appointment",
            Self::Resource => "resource",
            Self::Staff => "staff",
            Self::Location => "location",
        }
    }
}

impl std::fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKey {
    type Err = VertexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| VertexError::UnknownServiceKey(s.to_string()))
    }
}

/// Display terms for every [`ServiceKey`].
///
/// One field per key, so a vocabulary missing a key does not type-check
/// and does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Term for [`ServiceKey::Service`].
    pub service: String,
    /// Term for [`ServiceKey::Booking`].
    pub booking: String,
    /// Term for [`ServiceKey::Client`].
    pub client: String,
    /// Term for [`ServiceKey::Appointment`].
    pub appointment: String,
    /// Term for [`ServiceKey::Resource`].
    pub resource: String,
    /// Term for [`ServiceKey::Staff`].
    pub staff: String,
    /// Term for [`ServiceKey::Location`].
    pub location: String,
}

impl Vocabulary {
    /// Term for `key`.
    pub fn get(&self, key: ServiceKey) -> &str {
        match key {
            ServiceKey::Service => &self.service,
            ServiceKey::Booking => &self.booking,
            ServiceKey::Client => &self.client,
            ServiceKey::Appointment => &self.appointment,
            ServiceKey::Resource => &self.resource,
            ServiceKey::Staff => &self.staff,
            ServiceKey::Location => &self.location,
        }
    }

    /// Replace the term for `key`.
    pub fn set(&mut self, key: ServiceKey, term: impl Into<String>) {
        let slot = match key {
            ServiceKey::Service => &mut self.service,
            ServiceKey::Booking => &mut self.booking,
            ServiceKey::Client => &mut self.client,
            ServiceKey::Appointment => &mut self.appointment,
            ServiceKey::Resource => &mut self.resource,
            ServiceKey::Staff => &mut self.staff,
            ServiceKey::Location => &mut self.location,
        };
        *slot = term.into();
    }

    /// Keys whose term is empty or whitespace.
    pub fn blank_keys(&self) -> Vec<ServiceKey> {
        ServiceKey::all()
            .iter()
            .copied()
            .filter(|k| self.get(*k).trim().is_empty())
            .collect()
    }

    /// `(key, term)` pairs in canonical key order.
    pub fn entries(&self) -> impl Iterator<Item = (ServiceKey, &str)> {
        ServiceKey::all().iter().map(move |k| (*k, self.get(*k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary {
        Vocabulary {
            service: "Plat".into(),
            booking: "Réservation".into(),
            client: "Client".into(),
            appointment: "Service".into(),
            resource: "Table".into(),
            staff: "Équipe".into(),
            location: "Salle".into(),
        }
    }

    #[test]
    fn test_key_count() {
        assert_eq!(ServiceKey::all().len(), SERVICE_KEY_COUNT);
    }

    #[test]
    fn test_get_set() {
        let mut vocab = sample();
        assert_eq!(vocab.get(ServiceKey::Resource), "Table");
        vocab.set(ServiceKey::Resource, "Chaise");
        assert_eq!(vocab.resource, "Chaise");
    }

    #[test]
    fn test_blank_keys() {
        let mut vocab = sample();
        assert!(vocab.blank_keys().is_empty());
        vocab.set(ServiceKey::Staff, "  ");
        assert_eq!(vocab.blank_keys(), vec![ServiceKey::Staff]);
    }

    #[test]
    fn test_serialized_keys_match_service_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), SERVICE_KEY_COUNT);
        for key in ServiceKey::all() {
            assert!(obj.contains_key(key.as_str()), "missing {key}");
        }
    }

    #[test]
    fn test_parse_service_key() {
        for key in ServiceKey::all() {
            assert_eq!(key.as_str().parse::<ServiceKey>().unwrap(), *key);
        }
        assert!("Service".parse::<ServiceKey>().is_err());
        assert!("price".parse::<ServiceKey>().is_err());
    }

    #[test]
    fn test_partial_vocabulary_rejected() {
        let partial = serde_json::json!({"service": "Soin", "booking": "RDV"});
        assert!(serde_json::from_value::<Vocabulary>(partial).is_err());
    }
}
