//! Typed pass-through attributes with a closed allow-list.
//!
//! Components accept an [`ExtraAttrs`] value instead of forwarding arbitrary
//! rest props. The allow-list is the struct itself: only identification,
//! labelling, and test hooks can reach the DOM, and dynamic names are
//! validated before they are stored.

use leptos::logging;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("extra attribute {name:?} is not in the allow-list")]
/// A dynamic attribute name outside the pass-through allow-list.
pub struct UnknownAttributeError {
    /// The rejected attribute name.
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Allow-listed pass-through attributes rendered verbatim by components.
pub struct ExtraAttrs {
    /// `id` attribute for DOM targeting.
    pub id: Option<String>,
    /// Explicit ARIA `role` override.
    pub role: Option<String>,
    /// Tooltip `title` text.
    pub title: Option<String>,
    /// `data-testid` hook for UI tests.
    pub test_id: Option<String>,
    /// `aria-label` for elements without visible text.
    pub aria_label: Option<String>,
    /// `aria-describedby` id reference.
    pub aria_describedby: Option<String>,
}

impl ExtraAttrs {
    /// The attribute names the allow-list accepts.
    pub const ALLOWED: [&'static str; 6] = [
        "id",
        "role",
        "title",
        "data-testid",
        "aria-label",
        "aria-describedby",
    ];

    /// Stores one attribute after validating its name.
    pub fn insert(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownAttributeError> {
        let value = value.into();
        match name {
            "id" => self.id = Some(value),
            "role" => self.role = Some(value),
            "title" => self.title = Some(value),
            "data-testid" => self.test_id = Some(value),
            "aria-label" => self.aria_label = Some(value),
            "aria-describedby" => self.aria_describedby = Some(value),
            _ => {
                return Err(UnknownAttributeError {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Builds from dynamic name/value pairs, logging and skipping names the
    /// allow-list rejects so one bad pair never aborts a render.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attrs = Self::default();
        for (name, value) in pairs {
            if let Err(err) = attrs.insert(name.as_ref(), value) {
                logging::warn!("extra attribute dropped: {err}");
            }
        }
        attrs
    }

    /// Sets the `id` attribute.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the `data-testid` hook.
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Sets the `aria-label`.
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn allow_listed_names_are_stored() {
        let mut attrs = ExtraAttrs::default();
        for name in ExtraAttrs::ALLOWED {
            assert_eq!(attrs.insert(name, "value"), Ok(()), "name={name:?}");
        }
        assert_eq!(attrs.id.as_deref(), Some("value"));
        assert_eq!(attrs.test_id.as_deref(), Some("value"));
        assert_eq!(attrs.aria_describedby.as_deref(), Some("value"));
        assert!(!attrs.is_empty());
    }

    #[test]
    fn unknown_names_are_rejected_with_the_name() {
        let mut attrs = ExtraAttrs::default();
        let cases = ["onclick", "style", "data-anything", "aria-hidden"];
        for name in cases {
            let err = attrs.insert(name, "value").unwrap_err();
            assert_eq!(err.name, name);
        }
        assert!(attrs.is_empty());
    }

    #[test]
    fn from_pairs_skips_rejected_names() {
        let attrs = ExtraAttrs::from_pairs([
            ("data-testid", "vitals-card"),
            ("onclick", "alert(1)"),
            ("aria-label", "Vital signs"),
        ]);
        assert_eq!(attrs.test_id.as_deref(), Some("vitals-card"));
        assert_eq!(attrs.aria_label.as_deref(), Some("Vital signs"));
        assert_eq!(attrs.role, None);
    }

    #[test]
    fn builder_setters_chain() {
        let attrs = ExtraAttrs::default()
            .with_id("bp-field")
            .with_test_id("bp")
            .with_aria_label("Blood pressure");
        assert_eq!(attrs.id.as_deref(), Some("bp-field"));
        assert_eq!(attrs.test_id.as_deref(), Some("bp"));
        assert_eq!(attrs.aria_label.as_deref(), Some("Blood pressure"));
    }
}
