#![forbid(unsafe_code)]

//! Visual descriptors.

use smallvec::SmallVec;

/// What one cell should look like.
///
/// An `Icon` is a descriptor, not a display value: the engine compares and
/// copies icons, and a [`DisplayFactory`](crate::DisplayFactory) turns them
/// into concrete cells at the host boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "IconFields")
)]
pub struct Icon {
    key: String,
    name: Option<String>,
    lore: SmallVec<[String; 2]>,
    amount: u8,
}

impl Icon {
    /// Create an icon for the given visual key with an amount of one.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            lore: SmallVec::new(),
            amount: 1,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one line of description.
    #[must_use]
    pub fn with_lore(mut self, line: impl Into<String>) -> Self {
        self.lore.push(line.into());
        self
    }

    /// Set the stack amount, clamped to at least one.
    #[must_use]
    pub fn with_amount(mut self, amount: u8) -> Self {
        self.amount = amount.max(1);
        self
    }

    /// The visual key (material, sprite, glyph name...).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description lines.
    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    /// Stack amount.
    pub const fn amount(&self) -> u8 {
        self.amount
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct IconFields {
    key: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    lore: SmallVec<[String; 2]>,
    #[serde(default)]
    amount: u8,
}

#[cfg(feature = "serde")]
impl From<IconFields> for Icon {
    fn from(fields: IconFields) -> Self {
        Self {
            key: fields.key,
            name: fields.name,
            lore: fields.lore,
            amount: fields.amount.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fields() {
        let icon = Icon::new("stone")
            .named("Back")
            .with_lore("Return to the previous page")
            .with_amount(3);
        assert_eq!(icon.key(), "stone");
        assert_eq!(icon.name(), Some("Back"));
        assert_eq!(icon.lore(), ["Return to the previous page".to_string()]);
        assert_eq!(icon.amount(), 3);
    }

    #[test]
    fn amount_never_zero() {
        assert_eq!(Icon::new("air").with_amount(0).amount(), 1);
    }

    #[test]
    fn identity_is_structural() {
        assert_eq!(Icon::new("a").named("x"), Icon::new("a").named("x"));
        assert_ne!(Icon::new("a"), Icon::new("a").with_amount(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_amount_is_clamped() {
        let icon: Icon = serde_json::from_str(r#"{"key":"air","amount":0}"#).unwrap();
        assert_eq!(icon, Icon::new("air"));
        let icon: Icon =
            serde_json::from_str(r#"{"key":"gem","name":"Ruby","lore":["rare"],"amount":5}"#)
                .unwrap();
        assert_eq!(icon, Icon::new("gem").named("Ruby").with_lore("rare").with_amount(5));
    }
}
