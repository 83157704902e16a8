//! Figura - an immutable-by-default 2D vector scene graph.
//!
//! A scene is a tree of [`Diagram`] nodes: polygons, curves, images, text,
//! markup-styled multiline text, and groups. Operations return new trees and
//! leave their input untouched unless the tree was switched to the mutable
//! regime, where they edit in place instead.
//!
//! Geometry lives in [`figura_core`]; markup parsing in [`figura_markup`].
//! Renderers read the tree through the public accessors of [`Diagram`].
//!
//! # Examples
//!
//! ```
//! use figura::{Anchor, Diagram, FiguraError, combine};
//! use figura_core::geometry::Point;
//!
//! # fn main() -> Result<(), FiguraError> {
//! let frame = Diagram::polygon(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 6.0),
//!     Point::new(0.0, 6.0),
//! ])?;
//! let label = Diagram::multiline_markup("[b]Title[/b][br]body", Some("1.2em"))?
//!     .position(frame.get_anchor(Anchor::TopCenter));
//!
//! let scene = combine([&frame, &label]).rotate(0.1, Point::default());
//! assert_eq!(scene.children().len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod config;

mod diagram;
mod error;

pub use diagram::{Anchor, Diagram, ImageData, MultilineData, Variant, combine};
pub use error::FiguraError;
