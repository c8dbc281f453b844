//! PowerPoint (.pptx) presentation writing.
//!
//! - [`MutablePresentation`]: slides, slide size and document properties
//! - [`MutableSlide`] / [`MutableShape`]: auto shapes and text boxes
//! - [`package`]: assembly of the OPC parts
//! - [`DeckSummary`]: read-back of a written file
//!
//! # Example
//!
//! ```rust,no_run
//! use govdeck::common::{RGBColor, inches};
//! use govdeck::ooxml::pptx::{AutoShapeType, MutablePresentation, SlideBackground};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(SlideBackground::solid(RGBColor::new(0x0F, 0x17, 0x2A)));
//! slide
//!     .add_auto_shape(AutoShapeType::Rectangle, 0, 0, inches(2.0), inches(0.05))
//!     .fill(RGBColor::new(0x63, 0x66, 0xF1))
//!     .no_line();
//! slide.add_text_box("Hello", inches(1.0), inches(1.0), inches(4.0), inches(1.0));
//! pres.save("hello.pptx")?;
//! # Ok::<(), govdeck::ooxml::OoxmlError>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod reader;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{TextAlignment, TextFormat};
pub use reader::{DeckSummary, SlideSummary};
pub use writer::{
    AutoShapeType, Frame, MutablePresentation, MutableShape, MutableSlide, Paragraph, TextBody,
    TextRun,
};
