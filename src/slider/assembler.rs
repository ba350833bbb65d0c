//! One-shot construction of a [`Slider`] from its declaration.

use crate::common::{Error, Result};

use super::aggregate::Slider;
use super::config::SliderConfig;
use super::input::SliderInput;
use super::resolver::SlideResolver;
use super::slide::ResolvedSlide;

/// Builds finished sliders.
///
/// Each call to [`SliderAssembler::assemble`] starts from fresh increment
/// counters, so assembling the same input twice yields identical sliders.
///
/// # Examples
///
/// ```rust
/// use impress_slider::slider::{Axis, ConfigInput, IncrementRule, SlideInput, SliderAssembler, SliderInput};
///
/// let input = SliderInput::new()
///     .with_config(
///         ConfigInput::new()
///             .with_increment(Axis::X, IncrementRule::new().with_base(0.0).with_step(1000.0)),
///     )
///     .with_slide("intro", SlideInput::new())
///     .with_slide("details", SlideInput::new());
///
/// let slider = SliderAssembler::new("demo").assemble(input)?;
/// assert_eq!(slider.slide("details")?.axis_values()[Axis::X], 1000.0);
/// # Ok::<(), impress_slider::common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SliderAssembler {
    name: String,
}

impl SliderAssembler {
    /// Create an assembler for the slider called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The slider name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate the declaration, resolve the configuration and every slide.
    pub fn assemble(&self, input: SliderInput) -> Result<Slider> {
        if input.slides.is_empty() {
            return Err(Error::EmptyInput(
                "You must define at least one slide".to_string(),
            ));
        }

        let config = SliderConfig::resolve(&self.name, &input.config);
        log::debug!(
            "assembling slider '{}' with {} slides ({})",
            self.name,
            input.slides.len(),
            config.container_class()
        );

        let slides = self.resolve_slides(&config, input)?;
        Ok(Slider::new(self.name.clone(), config, slides))
    }

    fn resolve_slides(
        &self,
        config: &SliderConfig,
        input: SliderInput,
    ) -> Result<Vec<ResolvedSlide>> {
        if input.slides.is_empty() {
            return Err(Error::EmptyInput("No slides to compute".to_string()));
        }

        let resolver = SlideResolver::new(config.name());
        let mut increments = *config.increments();

        let slides = input
            .slides
            .into_iter()
            .map(|(key, slide)| resolver.resolve(key, slide, &mut increments))
            .collect();
        Ok(slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::increment::IncrementRule;
    use crate::slider::input::{ConfigInput, SlideInput};
    use crate::slider::Axis;
    use proptest::prelude::*;

    fn increments_on(axis: Axis, base: f64, step: f64) -> ConfigInput {
        ConfigInput::new().with_increment(axis, IncrementRule::new().with_base(base).with_step(step))
    }

    #[test]
    fn test_empty_input_fails() {
        let err = SliderAssembler::new("demo").assemble(SliderInput::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }

    #[test]
    fn test_empty_slides_fail_even_with_config() {
        let input = SliderInput::new().with_config(ConfigInput::new().with_class("dark"));
        let err = SliderAssembler::new("demo").assemble(input).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
    }

    #[test]
    fn test_increment_with_negative_step() {
        let mut input = SliderInput::new().with_config(increments_on(Axis::X, 10.0, -2.0));
        for key in ["a", "b", "c", "d"] {
            input = input.with_slide(key, SlideInput::new());
        }

        let slider = SliderAssembler::new("demo").assemble(input).unwrap();
        let xs: Vec<f64> = slider.iter().map(|s| s.axis_values()[Axis::X]).collect();
        assert_eq!(xs, [10.0, 8.0, 6.0, 4.0]);
    }

    #[test]
    fn test_reset_snaps_to_base_mid_sequence() {
        let input = SliderInput::new()
            .with_config(increments_on(Axis::Y, 5.0, 100.0))
            .with_slide("one", SlideInput::new())
            .with_slide("two", SlideInput::new())
            .with_slide("three", SlideInput::new().with_reset(Axis::Y))
            .with_slide("four", SlideInput::new());

        let slider = SliderAssembler::new("demo").assemble(input).unwrap();
        let ys: Vec<f64> = slider.iter().map(|s| s.axis_values()[Axis::Y]).collect();
        assert_eq!(ys, [5.0, 105.0, 5.0, 105.0]);
    }

    #[test]
    fn test_explicit_zero_is_indistinguishable_from_unset() {
        let input = SliderInput::new()
            .with_slide("pinned", SlideInput::new().with_position(Axis::Rotate, 0.0))
            .with_slide("free", SlideInput::new());

        let slider = SliderAssembler::new("demo").assemble(input).unwrap();
        assert_eq!(
            slider.slide("pinned").unwrap().axis_values(),
            slider.slide("free").unwrap().axis_values()
        );
    }

    #[test]
    fn test_config_name_drives_text_but_not_container_class() {
        let input = SliderInput::new()
            .with_config(ConfigInput::new().with_name("talk"))
            .with_slide("intro", SlideInput::new());

        let slider = SliderAssembler::new("demo").assemble(input).unwrap();
        assert_eq!(slider.slide("intro").unwrap().text(), "slides.talk.intro");
        assert!(slider.config().container_class().ends_with("impress_slide_demo"));
    }

    #[test]
    fn test_assembles_from_declaration() {
        let yaml = r#"
config:
  increments:
    x: { base: 0, i: 1000 }
    rotate: { base: 0, i: 90 }
slides:
  intro:
    text: Hello
  middle:
    data: { y: 300 }
  overview:
    reset: { x: true }
    attr: { class: overview-step }
"#;
        let input: SliderInput = serde_saphyr::from_str(yaml).unwrap();
        let slider = SliderAssembler::new("keynote").assemble(input).unwrap();

        let overview = slider.slide("overview").unwrap();
        assert_eq!(overview.axis_values()[Axis::X], 0.0);
        assert_eq!(overview.axis_values()[Axis::Rotate], 180.0);
        assert_eq!(overview.attr_class(), "step overview-step");
        assert_eq!(overview.text(), "");

        let middle = slider.slide("middle").unwrap();
        assert_eq!(middle.axis_values()[Axis::X], 1000.0);
        assert_eq!(middle.axis_values()[Axis::Y], 300.0);
        assert_eq!(middle.text(), "slides.keynote.middle");
    }

    fn slider_input_strategy() -> impl Strategy<Value = SliderInput> {
        let slide = (
            prop::option::of(-500i32..500),
            any::<bool>(),
            prop::option::of("[a-z ]{0,8}"),
        )
            .prop_map(|(pin, reset, class)| {
                let mut slide = SlideInput::new();
                if let Some(pin) = pin {
                    slide = slide.with_position(Axis::Z, f64::from(pin));
                }
                if reset {
                    slide = slide.with_reset(Axis::X);
                }
                if let Some(class) = class {
                    slide = slide.with_class(class);
                }
                slide
            });

        (prop::collection::vec(slide, 1..20), -100i32..100, -20i32..20).prop_map(
            |(slides, base, step)| {
                let config = ConfigInput::new()
                    .with_increment(
                        Axis::X,
                        IncrementRule::new().with_base(f64::from(base)).with_step(f64::from(step)),
                    )
                    .with_increment(Axis::Z, IncrementRule::new().with_base(0.0).with_step(7.0));
                slides
                    .into_iter()
                    .enumerate()
                    .fold(SliderInput::new().with_config(config), |input, (i, slide)| {
                        input.with_slide(format!("slide-{}", i), slide)
                    })
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_order_and_count_preserved(input in slider_input_strategy()) {
            let keys: Vec<String> = input.slides.iter().map(|(key, _)| key.to_string()).collect();
            let slider = SliderAssembler::new("prop").assemble(input).unwrap();

            prop_assert_eq!(slider.slide_count(), keys.len());
            let resolved: Vec<&str> = slider.iter().map(|s| s.id()).collect();
            prop_assert_eq!(resolved, keys.iter().map(String::as_str).collect::<Vec<_>>());
        }

        #[test]
        fn prop_assembly_is_idempotent(input in slider_input_strategy()) {
            let assembler = SliderAssembler::new("prop");
            let first = assembler.assemble(input.clone()).unwrap();
            let second = assembler.assemble(input).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_every_axis_resolved_and_zero_is_exact(input in slider_input_strategy()) {
            let slider = SliderAssembler::new("prop").assemble(input).unwrap();
            for slide in &slider {
                prop_assert!(slide.attr_class().starts_with("step"));
                for (_, value) in slide.axis_values().iter() {
                    prop_assert!(value.is_finite());
                    if *value == 0.0 {
                        prop_assert!(value.is_sign_positive());
                    }
                }
            }
        }
    }
}
