//! Declarative slider input.
//!
//! These types mirror the nested mapping a caller hands to the assembler:
//! a `config` block and an ordered `slides` block. They can be built in code
//! with the `with_*` methods or deserialized from any serde data format using
//! the key names of the declaration (`data`, `reset`, `attr`, `wrapWithTag`,
//! `increments.<axis>.i`, ...).

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::axis::{Axis, AxisMap};
use super::increment::IncrementRule;

/// Complete declaration of one slider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SliderInput {
    /// Container-level settings
    pub config: ConfigInput,
    /// Slides in declaration order
    pub slides: SlideList,
}

impl SliderInput {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the container-level settings.
    pub fn with_config(mut self, config: ConfigInput) -> Self {
        self.config = config;
        self
    }

    /// Append a slide under `key`.
    ///
    /// The key doubles as the slide id unless the slide sets one explicitly.
    pub fn with_slide(mut self, key: impl Into<String>, slide: SlideInput) -> Self {
        self.slides.push(key, slide);
        self
    }
}

/// Container-level settings of a slider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigInput {
    /// The `data` bag: name, transition duration and container axis values
    pub data: ConfigData,
    /// Auto-increment rules per axis
    pub increments: AxisMap<IncrementRule>,
    /// Container attributes (`class`, ...)
    pub attr: Attributes,
    /// Opacity of slides that are not the active one
    pub inactive_opacity: Option<LooseNumber>,
}

impl ConfigInput {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the slider name used in text keys.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.data.name = Some(name.into());
        self
    }

    /// Set the transition duration in milliseconds.
    pub fn with_transition_duration(mut self, millis: u64) -> Self {
        self.data.transition_duration = Some(millis);
        self
    }

    /// Set a container-level axis value.
    pub fn with_axis(mut self, axis: Axis, value: f64) -> Self {
        self.data.axes[axis] = Some(value);
        self
    }

    /// Configure auto-increment for an axis.
    pub fn with_increment(mut self, axis: Axis, rule: IncrementRule) -> Self {
        self.increments[axis] = rule;
        self
    }

    /// Set the container class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.attr.set_class(class);
        self
    }

    /// Set the inactive slide opacity.
    pub fn with_inactive_opacity(mut self, opacity: impl Into<LooseNumber>) -> Self {
        self.inactive_opacity = Some(opacity.into());
        self
    }
}

/// The container `data` bag.
///
/// Recognized keys are `name`, `transition-duration` and the axis names;
/// anything else is skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigData {
    pub name: Option<String>,
    pub transition_duration: Option<u64>,
    pub axes: AxisMap<Option<f64>>,
}

impl<'de> Deserialize<'de> for ConfigData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigDataVisitor;

        impl<'de> Visitor<'de> for ConfigDataVisitor {
            type Value = ConfigData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a slider data mapping")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ConfigData::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(ConfigData::default())
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
                d.deserialize_map(self)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut data = ConfigData::default();
                while let Some(key) = access.next_key::<String>()? {
                    match key.as_str() {
                        "name" => data.name = access.next_value()?,
                        "transition-duration" => data.transition_duration = access.next_value()?,
                        other => match Axis::from_name(other) {
                            Some(axis) => data.axes[axis] = access.next_value()?,
                            None => {
                                log::debug!("ignoring unknown slider data key '{}'", other);
                                access.next_value::<IgnoredAny>()?;
                            },
                        },
                    }
                }
                Ok(data)
            }
        }

        deserializer.deserialize_option(ConfigDataVisitor)
    }
}

/// String attributes of a container or slide, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// The `class` attribute, if present.
    pub fn class(&self) -> Option<&str> {
        self.0.get("class").map(String::as_str)
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.0.insert("class".to_string(), class.into());
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// All attributes except `class`.
    pub fn without_class(&self) -> Attributes {
        Attributes(
            self.0
                .iter()
                .filter(|(name, _)| name.as_str() != "class")
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A number that may have been declared loosely (string, boolean).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl LooseNumber {
    /// Coerce to a real number.
    ///
    /// Booleans become 1 or 0; strings are parsed after trimming and fall back
    /// to 0 when they are not numeric.
    pub fn to_f64(&self) -> f64 {
        match self {
            LooseNumber::Number(value) => *value,
            LooseNumber::Flag(flag) => f64::from(u8::from(*flag)),
            LooseNumber::Text(text) => text.trim().parse().unwrap_or_else(|_| {
                log::warn!("'{}' is not numeric, coercing to 0", text);
                0.0
            }),
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

/// Declaration of a single slide.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlideInput {
    /// Explicit id; defaults to the slide key
    pub id: Option<String>,
    /// Slide attributes; `class` is prefixed with `step`
    pub attr: Attributes,
    /// Axes whose counter snaps back to its base before this slide
    pub reset: AxisMap<bool>,
    /// Explicit axis values; `None` uses the running counter
    pub data: AxisMap<Option<f64>>,
    #[serde(deserialize_with = "string_or_flag")]
    pub view: Option<String>,
    #[serde(deserialize_with = "string_or_flag")]
    pub image: Option<String>,
    #[serde(rename = "wrapWithTag", deserialize_with = "null_as_default")]
    pub wrap_with_tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credits: String,
}

impl SlideInput {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.attr.set_class(class);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr.insert(name, value);
        self
    }

    /// Pin an axis to an explicit value.
    pub fn with_position(mut self, axis: Axis, value: f64) -> Self {
        self.data[axis] = Some(value);
        self
    }

    /// Reset an axis counter to its base before this slide is resolved.
    pub fn with_reset(mut self, axis: Axis) -> Self {
        self.reset[axis] = true;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    pub fn with_wrap_with_tag(mut self, tag: impl Into<String>) -> Self {
        self.wrap_with_tag = tag.into();
        self
    }

    pub fn with_credits(mut self, credits: impl Into<String>) -> Self {
        self.credits = credits.into();
        self
    }
}

/// Slides keyed by their declaration key, in declaration order.
///
/// Deserializes from a mapping (string or integer keys) or from a sequence,
/// in which case the keys are the zero-based positions.
#[derive(Debug, Clone, Default)]
pub struct SlideList(Vec<(String, SlideInput)>);

impl SlideList {
    pub fn push(&mut self, key: impl Into<String>, slide: SlideInput) {
        self.0.push((key.into(), slide));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlideInput)> {
        self.0.iter().map(|(key, slide)| (key.as_str(), slide))
    }
}

impl IntoIterator for SlideList {
    type Item = (String, SlideInput);
    type IntoIter = std::vec::IntoIter<(String, SlideInput)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, SlideInput)> for SlideList {
    fn from_iter<I: IntoIterator<Item = (K, SlideInput)>>(iter: I) -> Self {
        SlideList(iter.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlideKey {
    Index(i64),
    Name(String),
}

impl From<SlideKey> for String {
    fn from(key: SlideKey) -> Self {
        match key {
            SlideKey::Index(index) => index.to_string(),
            SlideKey::Name(name) => name,
        }
    }
}

impl<'de> Deserialize<'de> for SlideList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlideListVisitor;

        impl<'de> Visitor<'de> for SlideListVisitor {
            type Value = SlideList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping or sequence of slides")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(SlideList::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut slides = SlideList::default();
                while let Some(key) = access.next_key::<SlideKey>()? {
                    let slide: Option<SlideInput> = access.next_value()?;
                    slides.push(key, slide.unwrap_or_default());
                }
                Ok(slides)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut slides = SlideList::default();
                let mut index = 0usize;
                while let Some(slide) = access.next_element::<Option<SlideInput>>()? {
                    slides.push(index.to_string(), slide.unwrap_or_default());
                    index += 1;
                }
                Ok(slides)
            }
        }

        deserializer.deserialize_any(SlideListVisitor)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFlag {
    Flag(bool),
    Text(String),
}

/// `view` and `image` are either a string or `false` for "none".
fn string_or_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<StringOrFlag>::deserialize(deserializer)? {
        Some(StringOrFlag::Text(text)) => Some(text),
        Some(StringOrFlag::Flag(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECLARATION: &str = r#"
config:
  data:
    name: Keynote
    transition-duration: 500
    perspective: 1000
    z: 12
  increments:
    x:
      base: 0
      i: 1000
  attr:
    class: dark
  inactive_opacity: "0.3"
slides:
  intro:
    attr:
      class: title
    text: Welcome
  details:
    data:
      y: 200
    reset:
      x: true
    image: details.png
    view: false
  overview: ~
"#;

    #[test]
    fn test_deserialize_declaration() {
        let input: SliderInput = serde_saphyr::from_str(DECLARATION).unwrap();

        assert_eq!(input.config.data.name.as_deref(), Some("Keynote"));
        assert_eq!(input.config.data.transition_duration, Some(500));
        assert_eq!(input.config.data.axes[Axis::Z], Some(12.0));
        assert_eq!(input.config.increments[Axis::X].step, Some(1000.0));
        assert_eq!(input.config.attr.class(), Some("dark"));
        assert_eq!(input.config.inactive_opacity.as_ref().map(LooseNumber::to_f64), Some(0.3));

        let keys: Vec<&str> = input.slides.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["intro", "details", "overview"]);

        let (_, details) = input.slides.iter().nth(1).unwrap();
        assert_eq!(details.data[Axis::Y], Some(200.0));
        assert_eq!(details.data[Axis::X], None);
        assert!(details.reset[Axis::X]);
        assert!(!details.reset[Axis::Y]);
        assert_eq!(details.image.as_deref(), Some("details.png"));
        assert_eq!(details.view, None);
    }

    #[test]
    fn test_sequence_slides_use_positional_keys() {
        let input: SliderInput =
            serde_saphyr::from_str("slides:\n  - text: first\n  - text: second\n").unwrap();
        let keys: Vec<&str> = input.slides.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["0", "1"]);
    }

    #[test]
    fn test_loose_number_coercion() {
        assert_eq!(LooseNumber::from(0.5).to_f64(), 0.5);
        assert_eq!(LooseNumber::Flag(true).to_f64(), 1.0);
        assert_eq!(LooseNumber::Flag(false).to_f64(), 0.0);
        assert_eq!(LooseNumber::from(" 0.25 ").to_f64(), 0.25);
        assert_eq!(LooseNumber::from("opaque").to_f64(), 0.0);
    }

    #[test]
    fn test_slide_builder() {
        let slide = SlideInput::new()
            .with_id("cover")
            .with_class("big")
            .with_attribute("data-scale", "2")
            .with_position(Axis::RotateZ, 90.0)
            .with_reset(Axis::Y);

        assert_eq!(slide.id.as_deref(), Some("cover"));
        assert_eq!(slide.attr.class(), Some("big"));
        assert_eq!(slide.attr.without_class().get("data-scale"), Some("2"));
        assert_eq!(slide.attr.without_class().class(), None);
        assert_eq!(slide.data[Axis::RotateZ], Some(90.0));
        assert!(slide.reset[Axis::Y]);
    }
}
