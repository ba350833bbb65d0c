//! Resolved slides.

use serde::Serialize;

use super::axis::{AxisMap, AxisValues};
use super::input::Attributes;

/// A slide after axis values, class names and text defaults are computed.
///
/// Self-contained: it holds no reference to the running increment state and
/// never changes after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSlide {
    pub(super) key: String,
    pub(super) id: String,
    #[serde(rename = "class")]
    pub(super) attr_class: String,
    #[serde(rename = "attr", skip_serializing_if = "Attributes::is_empty")]
    pub(super) attributes: Attributes,
    #[serde(rename = "reset")]
    pub(super) resets: AxisMap<bool>,
    #[serde(rename = "data")]
    pub(super) axis_values: AxisValues,
    pub(super) text: String,
    pub(super) image: Option<String>,
    pub(super) view: Option<String>,
    #[serde(rename = "wrapWithTag")]
    pub(super) wrap_with_tag: String,
    pub(super) credits: String,
}

impl ResolvedSlide {
    /// The key the slide was declared under.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The slide id (the key unless declared explicitly).
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Class list of the slide, always starting with `step`.
    #[inline]
    pub fn attr_class(&self) -> &str {
        &self.attr_class
    }

    /// Declared attributes other than `class`.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Reset flags as declared.
    #[inline]
    pub fn resets(&self) -> &AxisMap<bool> {
        &self.resets
    }

    /// Final position on every axis.
    #[inline]
    pub fn axis_values(&self) -> &AxisValues {
        &self.axis_values
    }

    /// Text, or the translation key derived from the slider name and id.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[inline]
    pub fn view(&self) -> Option<&str> {
        self.view.as_deref()
    }

    #[inline]
    pub fn wrap_with_tag(&self) -> &str {
        &self.wrap_with_tag
    }

    #[inline]
    pub fn credits(&self) -> &str {
        &self.credits
    }
}
