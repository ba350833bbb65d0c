//! The finished, read-only slider.

use serde::Serialize;

use crate::common::{Error, Result};

use super::assembler::SliderAssembler;
use super::config::SliderConfig;
use super::input::SliderInput;
use super::slide::ResolvedSlide;

/// A slider with every slide resolved.
///
/// Holds the slides in declaration order together with the resolved
/// configuration. There are no mutating operations, so a `Slider` can be
/// shared freely between threads once built.
///
/// # Examples
///
/// ```rust
/// use impress_slider::Slider;
/// use impress_slider::slider::{SlideInput, SliderInput};
///
/// let input = SliderInput::new()
///     .with_slide("intro", SlideInput::new())
///     .with_slide("overview", SlideInput::new());
/// let slider = Slider::create("demo", input)?;
///
/// assert_eq!(slider.slide_count(), 2);
/// assert_eq!(slider.slide("intro")?.text(), "slides.demo.intro");
/// assert!(slider.slide("outro").is_err());
/// # Ok::<(), impress_slider::common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    name: String,
    config: SliderConfig,
    slides: Vec<ResolvedSlide>,
}

impl Slider {
    pub(super) fn new(name: String, config: SliderConfig, slides: Vec<ResolvedSlide>) -> Self {
        Self { name, config, slides }
    }

    /// Assemble a slider from its declaration.
    ///
    /// Shorthand for `SliderAssembler::new(name).assemble(input)`.
    pub fn create(name: impl Into<String>, input: SliderInput) -> Result<Self> {
        SliderAssembler::new(name).assemble(input)
    }

    /// The slider name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved configuration.
    #[inline]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Number of slides; never zero.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Look up a slide by id.
    pub fn slide(&self, id: &str) -> Result<&ResolvedSlide> {
        self.slides
            .iter()
            .find(|slide| slide.id() == id)
            .ok_or_else(|| Error::SlideNotFound(id.to_string()))
    }

    /// All slides in declaration order.
    #[inline]
    pub fn slides(&self) -> &[ResolvedSlide] {
        &self.slides
    }

    /// Iterate over slides in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedSlide> {
        self.slides.iter()
    }

    /// Dump the whole slider (name, configuration and slides) as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize slider to YAML: {}", e)))
    }
}

impl<'a> IntoIterator for &'a Slider {
    type Item = &'a ResolvedSlide;
    type IntoIter = std::slice::Iter<'a, ResolvedSlide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
