//! Tri-state field wrapper for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field in an update payload that distinguishes "leave unchanged" from
/// "clear the stored value" from "replace with a new value".
///
/// JSON carries the three states as a missing key, an explicit `null`, and a
/// value. A plain `Option` collapses the first two, so fields needing the
/// distinction use this wrapper with both serde attributes:
///
/// ```ignore
/// #[serde(default, skip_serializing_if = "Patch::is_keep")]
/// pub meta_image: Patch<NewConceptMetaImage>,
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key absent: the stored value stays as it is.
    Keep,
    /// Key present as `null`: the stored value is removed.
    Clear,
    /// Key present with a value: the stored value is replaced.
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Patch::Clear)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    /// The new value, if this patch sets one.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Keep is only reachable here without `skip_serializing_if`;
            // emitting null keeps the output valid JSON either way.
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
            Patch::Set(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only runs when the key is present; an absent key never reaches
        // serde and falls back to Default (Keep) via #[serde(default)].
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Payload {
        #[serde(default, skip_serializing_if = "Patch::is_keep")]
        field: Patch<String>,
    }

    #[test]
    fn absent_key_decodes_as_keep() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.field, Patch::Keep);
    }

    #[test]
    fn null_decodes_as_clear() {
        let payload: Payload = serde_json::from_str(r#"{"field":null}"#).unwrap();
        assert_eq!(payload.field, Patch::Clear);
    }

    #[test]
    fn value_decodes_as_set() {
        let payload: Payload = serde_json::from_str(r#"{"field":"x"}"#).unwrap();
        assert_eq!(payload.field, Patch::Set("x".to_string()));
    }

    #[test]
    fn each_state_encodes_back_to_its_json_form() {
        let keep = serde_json::to_string(&Payload { field: Patch::Keep }).unwrap();
        assert_eq!(keep, "{}");

        let clear = serde_json::to_string(&Payload { field: Patch::Clear }).unwrap();
        assert_eq!(clear, r#"{"field":null}"#);

        let set = serde_json::to_string(&Payload {
            field: Patch::Set("x".to_string()),
        })
        .unwrap();
        assert_eq!(set, r#"{"field":"x"}"#);
    }

    #[test]
    fn accessors() {
        let set: Patch<i32> = Patch::Set(7);
        assert!(set.is_set());
        assert_eq!(set.as_set(), Some(&7));
        assert!(Patch::<i32>::Keep.is_keep());
        assert!(Patch::<i32>::Clear.is_clear());
        assert_eq!(Patch::<i32>::Clear.as_set(), None);
    }
}
