//! impress-slider - positional and display configuration for impress-style slides
//!
//! Given a declarative description of a slider (container settings, per-slide
//! overrides and per-axis auto-increment rules), this library resolves every
//! slide to a position on seven axes plus its display metadata: class names,
//! text keys and pass-through fields for the rendering layer.
//!
//! # Features
//!
//! - **Auto-increment**: per-axis counters that advance after every slide
//! - **Resets**: snap a counter back to its base on a given slide
//! - **Overrides**: pin any axis of any slide to an explicit value
//! - **Immutable result**: a finished [`Slider`] is read-only and `Send + Sync`
//! - **serde input**: declarations deserialize from any serde data format
//!
//! # Example
//!
//! ```rust
//! use impress_slider::Slider;
//! use impress_slider::slider::{Axis, SlideInput, SliderInput};
//!
//! # fn main() -> Result<(), impress_slider::Error> {
//! let input = SliderInput::new()
//!     .with_slide("intro", SlideInput::new().with_class("title"))
//!     .with_slide("details", SlideInput::new().with_position(Axis::Y, 800.0));
//!
//! let slider = Slider::create("demo", input)?;
//! assert_eq!(
//!     slider.config().container_class(),
//!     "impress_slides_container impress_slide_demo"
//! );
//!
//! for slide in &slider {
//!     println!("{} [{}] y={}", slide.id(), slide.attr_class(), slide.axis_values()[Axis::Y]);
//! }
//! # Ok(())
//! # }
//! ```

/// Types shared across the crate, notably the error type.
pub mod common;

/// Slider declaration, resolution and the finished slider.
///
/// See the module documentation for the resolution rules.
pub mod slider;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use slider::{Axis, ResolvedSlide, Slider, SliderAssembler, SliderConfig};
