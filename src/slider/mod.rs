//! Slide positioning for impress-style presentations.
//!
//! A slider is an ordered set of slides, each placed on seven axes (three
//! translations, four rotations). Positions come either from explicit
//! per-slide values or from per-axis auto-increment counters that advance after
//! every slide and can be snapped back to a base value.
//!
//! # Architecture
//!
//! - `Axis` / `AxisMap`: the closed axis set and a table holding one entry per axis
//! - `IncrementState`: a per-axis running counter
//! - `SlideResolver`: resolves one slide against the counters
//! - `SliderAssembler`: walks the slides in declaration order
//! - `Slider`: the finished, read-only result
//!
//! # Example
//!
//! ```rust
//! use impress_slider::slider::{Axis, ConfigInput, IncrementRule, SlideInput, Slider, SliderInput};
//!
//! let input = SliderInput::new()
//!     .with_config(
//!         ConfigInput::new()
//!             .with_increment(Axis::X, IncrementRule::new().with_base(10.0).with_step(-2.0)),
//!     )
//!     .with_slide("intro", SlideInput::new())
//!     .with_slide("next", SlideInput::new())
//!     .with_slide("back", SlideInput::new().with_reset(Axis::X));
//!
//! let slider = Slider::create("demo", input)?;
//! let xs: Vec<f64> = slider.iter().map(|s| s.axis_values()[Axis::X]).collect();
//! assert_eq!(xs, [10.0, 8.0, 10.0]);
//! # Ok::<(), impress_slider::common::Error>(())
//! ```

// Submodule declarations
mod aggregate;
mod assembler;
mod axis;
mod config;
mod increment;
mod input;
mod resolver;
mod slide;

// Re-exports
pub use aggregate::Slider;
pub use assembler::SliderAssembler;
pub use axis::{AXIS_COUNT, Axis, AxisMap, AxisValues, UnknownAxis};
pub use config::{
    CONTAINER_CLASS, DEFAULT_INACTIVE_OPACITY, DEFAULT_TRANSITION_DURATION_MS,
    SLIDER_CLASS_PREFIX, SliderConfig, container_class,
};
pub use increment::{IncrementRule, IncrementState, IncrementTable};
pub use input::{Attributes, ConfigData, ConfigInput, LooseNumber, SlideInput, SlideList, SliderInput};
pub use resolver::{OVERVIEW_ID, SlideResolver, resolve_axes};
pub use slide::ResolvedSlide;
