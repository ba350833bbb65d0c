//! Resolved container-level configuration.

use serde::Serialize;

use super::axis::{AxisMap, AxisValues};
use super::increment::IncrementTable;
use super::input::{Attributes, ConfigInput};

/// Class every slider container carries.
pub const CONTAINER_CLASS: &str = "impress_slides_container";

/// Prefix of the per-slider container class (`impress_slide_<name>`).
pub const SLIDER_CLASS_PREFIX: &str = "impress_slide_";

/// Default transition duration in milliseconds.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 1000;

/// Default opacity of inactive slides.
pub const DEFAULT_INACTIVE_OPACITY: f64 = 1.0;

/// Global settings of a slider, resolved once at assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderConfig {
    name: String,
    #[serde(rename = "transition-duration")]
    transition_duration_ms: u64,
    inactive_opacity: f64,
    #[serde(rename = "class")]
    container_class: String,
    #[serde(rename = "attr", skip_serializing_if = "Attributes::is_empty")]
    container_attributes: Attributes,
    #[serde(rename = "data")]
    axis_data: AxisValues,
    increments: IncrementTable,
}

impl SliderConfig {
    /// Resolve the container settings of the slider called `slider_name`.
    ///
    /// The name in `config.data` (when given) replaces the slider name for
    /// text keys; the container class suffix always uses `slider_name`.
    pub fn resolve(slider_name: &str, input: &ConfigInput) -> Self {
        let name = input
            .data
            .name
            .clone()
            .unwrap_or_else(|| slider_name.to_string());

        Self {
            name,
            transition_duration_ms: input
                .data
                .transition_duration
                .unwrap_or(DEFAULT_TRANSITION_DURATION_MS),
            inactive_opacity: input
                .inactive_opacity
                .as_ref()
                .map_or(DEFAULT_INACTIVE_OPACITY, |opacity| opacity.to_f64()),
            container_class: container_class(slider_name, input.attr.class()),
            container_attributes: input.attr.without_class(),
            axis_data: input.data.axes.map(|_, value| value.unwrap_or(0.0)),
            increments: IncrementTable::from_rules(&input.increments),
        }
    }

    /// Name used in default text keys.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn transition_duration_ms(&self) -> u64 {
        self.transition_duration_ms
    }

    #[inline]
    pub fn inactive_opacity(&self) -> f64 {
        self.inactive_opacity
    }

    /// Class list of the slide container.
    #[inline]
    pub fn container_class(&self) -> &str {
        &self.container_class
    }

    /// Container attributes other than `class`.
    #[inline]
    pub fn container_attributes(&self) -> &Attributes {
        &self.container_attributes
    }

    /// Container-level axis values.
    #[inline]
    pub fn axis_data(&self) -> &AxisMap<f64> {
        &self.axis_data
    }

    /// Increment counters as they stood before the first slide.
    #[inline]
    pub fn increments(&self) -> &IncrementTable {
        &self.increments
    }
}

/// Build the container class list.
///
/// A missing class becomes [`CONTAINER_CLASS`]; a class without it gets it
/// prepended. The `impress_slide_<name>` suffix is always appended.
pub fn container_class(slider_name: &str, class: Option<&str>) -> String {
    let mut class = match class {
        None => CONTAINER_CLASS.to_string(),
        Some(class) if class.contains(CONTAINER_CLASS) => class.to_string(),
        Some(class) => format!("{} {}", CONTAINER_CLASS, class),
    };
    class.push(' ');
    class.push_str(SLIDER_CLASS_PREFIX);
    class.push_str(slider_name);
    class.trim().to_string()
}
