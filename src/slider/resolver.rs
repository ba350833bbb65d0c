//! Per-slide resolution against the running increment counters.

use super::axis::{Axis, AxisMap, AxisValues};
use super::increment::IncrementTable;
use super::input::SlideInput;
use super::slide::ResolvedSlide;

/// Id of the conventional overview slide, which never gets a default text key.
pub const OVERVIEW_ID: &str = "overview";

/// Resolves slides one at a time.
///
/// The resolver itself is stateless; the running counters are owned by the
/// caller and lent to [`SlideResolver::resolve`] for the duration of one slide.
#[derive(Debug, Clone, Copy)]
pub struct SlideResolver<'a> {
    text_namespace: &'a str,
}

impl<'a> SlideResolver<'a> {
    /// Create a resolver whose default text keys are `slides.<text_namespace>.<id>`.
    pub fn new(text_namespace: &'a str) -> Self {
        Self { text_namespace }
    }

    /// Resolve one slide and advance the counters past it.
    pub fn resolve(
        &self,
        key: String,
        slide: SlideInput,
        increments: &mut IncrementTable,
    ) -> ResolvedSlide {
        let SlideInput {
            id,
            attr,
            reset,
            data,
            view,
            image,
            wrap_with_tag,
            mut text,
            credits,
        } = slide;

        let id = id.unwrap_or_else(|| key.clone());
        let attr_class = format!("step {}", attr.class().unwrap_or_default())
            .trim()
            .to_string();

        if is_falsy_text(&text) && id != OVERVIEW_ID {
            text = format!("slides.{}.{}", self.text_namespace, id);
        }

        let axis_values = resolve_axes(&data, &reset, increments);
        log::trace!("resolved slide '{}': {:?}", id, axis_values);

        ResolvedSlide {
            key,
            id,
            attr_class,
            attributes: attr.without_class(),
            resets: reset,
            axis_values,
            text,
            image,
            view,
            wrap_with_tag,
            credits,
        }
    }
}

/// Resolve every axis of one slide.
///
/// Per axis: reset the counter when flagged and a base exists, take the
/// override or else the counter, then advance the counter whether or not the
/// override was used. Falsy results collapse to exactly `0.0`, so an explicit
/// zero and an unset axis are indistinguishable.
pub fn resolve_axes(
    overrides: &AxisMap<Option<f64>>,
    resets: &AxisMap<bool>,
    increments: &mut IncrementTable,
) -> AxisValues {
    AxisMap::from_fn(|axis: Axis| {
        let state = &mut increments[axis];
        if resets[axis] && state.base().is_some() {
            log::trace!("resetting {} to {:?}", axis, state.base());
            state.reset();
        }
        let value = overrides[axis].unwrap_or(state.current());
        state.advance();
        collapse_falsy(value)
    })
}

#[inline]
fn collapse_falsy(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Loose truthiness of a text: empty and `"0"` count as unset.
#[inline]
fn is_falsy_text(text: &str) -> bool {
    text.is_empty() || text == "0"
}
