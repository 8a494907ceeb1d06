//! Shared answer store
//!
//! One mapping from stable field keys to entered values, owned by the
//! [`FormSession`](crate::session::FormSession) and passed to widgets.
//! Values persist across step navigation in both directions; navigation
//! never clears them.

use std::collections::BTreeMap;

use crate::photo::PhotoAttachment;

/// Suffix of the derived per-option price keys (`bus` -> `bus-price`).
pub const PRICE_SUFFIX: &str = "-price";

/// Mapping of field keys to user-entered values, plus the optional photo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerStore {
    values: BTreeMap<String, String>,
    photo: Option<PhotoAttachment>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stored value for `key`, or the empty string.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Remove a value entirely (used by signature clear and the terms box).
    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// A field counts as filled once its value is non-empty.
    pub fn is_filled(&self, key: &str) -> bool {
        !self.value(key).is_empty()
    }

    /// Store the surcharge of a selected option under `<key>-price`.
    pub fn set_price(&mut self, field_key: &str, price: u32) {
        self.values
            .insert(format!("{field_key}{PRICE_SUFFIX}"), price.to_string());
    }

    /// Surcharge recorded for a field, defaulting to 0 when unset or garbled.
    pub fn price(&self, field_key: &str) -> u32 {
        self.values
            .get(&format!("{field_key}{PRICE_SUFFIX}"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub fn set_photo(&mut self, photo: PhotoAttachment) {
        self.photo = Some(photo);
    }

    pub fn photo(&self) -> Option<&PhotoAttachment> {
        self.photo.as_ref()
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// All stored key/value pairs, for logging and tests.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unset_value_is_empty() {
        let store = AnswerStore::new();
        assert_eq!(store.value("name"), "");
        assert!(!store.is_filled("name"));
        assert_eq!(store.price("bus"), 0);
    }

    #[test]
    fn price_roundtrip_and_garbage_tolerance() {
        let mut store = AnswerStore::new();
        store.set_price("bus", 30);
        assert_eq!(store.price("bus"), 30);

        store.set("room-price", "not a number");
        assert_eq!(store.price("room"), 0);
    }

    #[test]
    fn clear_removes_value() {
        let mut store = AnswerStore::new();
        store.set("signature", "data:image/png;base64,AAAA");
        assert!(store.is_filled("signature"));
        store.clear("signature");
        assert!(!store.is_filled("signature"));
    }

    proptest! {
        #[test]
        fn set_then_get_persists(key in "[a-z\\-]{1,16}", value in ".{0,64}") {
            let mut store = AnswerStore::new();
            store.set(&key, value.clone());
            prop_assert_eq!(store.value(&key), value.as_str());
        }
    }
}
