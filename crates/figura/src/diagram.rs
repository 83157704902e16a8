//! The diagram tree.
//!
//! A [`Diagram`] is a handle to a node of a scene tree. Nodes are polygons,
//! curves, images, single-line text, multiline text, or groups of other
//! nodes.
//!
//! # Value regimes
//!
//! Every node is in one of two regimes, chosen by its `mutable` flag:
//!
//! - **Immutable** (the default): operations leave the node alone and return
//!   a deep copy with the change applied. No two trees produced this way
//!   share a node.
//! - **Mutable** (opt-in through [`Diagram::mutable`]): operations edit the
//!   node in place and return a handle to the same node, so
//!   [`Diagram::ptr_eq`] holds between input and output. This is meant for
//!   tight update loops where copying whole trees is too slow.
//!
//! Regimes can be mixed: [`Diagram::mutable_parent_only`] marks a single node,
//! and recursive operations resolve the regime of each node they visit.
//!
//! # Examples
//!
//! ```
//! # use figura::{Diagram, FiguraError};
//! # use figura_core::geometry::Point;
//! # fn main() -> Result<(), FiguraError> {
//! let square = Diagram::polygon(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ])?;
//!
//! let moved = square.translate(Point::new(5.0, 0.0));
//! assert_eq!(square.bounding_box().min_x(), 0.0);
//! assert_eq!(moved.bounding_box().min_x(), 5.0);
//!
//! let live = square.mutable();
//! let same = live.translate(Point::new(5.0, 0.0));
//! assert!(same.ptr_eq(&live));
//! # Ok(())
//! # }
//! ```

mod anchor;
mod shape;
mod spatial;
mod structure;
mod styling;
mod tags;

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

use figura_core::{
    geometry::{Point, Size},
    path::Path,
    style::{Style, TextData},
};
use figura_markup::TextRun;
use log::debug;

use crate::error::FiguraError;

pub use anchor::Anchor;
pub use shape::{ImageData, MultilineData, Variant};
pub use structure::combine;

pub(crate) use shape::Shape;

/// The data of one node.
#[derive(Debug, PartialEq)]
pub(crate) struct DiagramNode {
    pub(crate) shape: Shape,
    pub(crate) origin: Point,
    pub(crate) style: Style,
    pub(crate) tags: BTreeSet<String>,
    pub(crate) mutable: bool,
}

impl DiagramNode {
    fn new(shape: Shape, origin: Point) -> Self {
        Self {
            shape,
            origin,
            style: Style::default(),
            tags: BTreeSet::new(),
            mutable: false,
        }
    }

    /// Copies everything but the payload, which is replaced by `shape`.
    fn with_shape(&self, shape: Shape) -> Self {
        Self {
            shape,
            origin: self.origin,
            style: self.style.clone(),
            tags: self.tags.clone(),
            mutable: self.mutable,
        }
    }

    /// Sets the regime of this node and of the path it owns.
    pub(crate) fn set_mutable(&mut self, mutable: bool) {
        self.mutable = mutable;
        if let Some(path) = self.shape.path_mut() {
            path.set_mutable(mutable);
        }
    }

    pub(crate) fn variant(&self) -> Variant {
        self.shape.variant()
    }
}

/// Handle to a node of a scene tree.
///
/// Handles are cheap to create but deliberately not `Clone`: duplicating a
/// node is always an explicit deep [`Diagram::copy`].
#[derive(Debug)]
pub struct Diagram {
    inner: Rc<RefCell<DiagramNode>>,
}

// =============================================================================
// Constructors
// =============================================================================

impl Diagram {
    fn from_node(node: DiagramNode) -> Self {
        Self {
            inner: Rc::new(RefCell::new(node)),
        }
    }

    /// Creates a closed polygon through `points`, with its origin at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Fails if `points` is empty.
    pub fn polygon(points: impl Into<Vec<Point>>) -> Result<Self, FiguraError> {
        let path = Path::new(points)?;
        Ok(Self::from_node(DiagramNode::new(
            Shape::Polygon(path),
            Point::default(),
        )))
    }

    /// Creates an open curve through `points`, with its origin at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Fails if `points` is empty.
    pub fn curve(points: impl Into<Vec<Point>>) -> Result<Self, FiguraError> {
        let path = Path::new(points)?;
        Ok(Self::from_node(DiagramNode::new(
            Shape::Curve(path),
            Point::default(),
        )))
    }

    /// A curve made of the single point `origin`.
    pub fn empty(origin: Point) -> Self {
        let path = Path::new(vec![origin]).expect("a single point is a valid path");
        Self::from_node(DiagramNode::new(Shape::Curve(path), origin))
    }

    /// Creates a single line of text anchored at `(0, 0)`.
    pub fn text(content: impl Into<String>) -> Self {
        Self::from_node(DiagramNode::new(
            Shape::Text(TextData::new(content)),
            Point::default(),
        ))
    }

    /// Creates an image of the given size centered on `(0, 0)`.
    ///
    /// The path of an image node is its rectangle, so transforms move and
    /// deform it like any polygon.
    pub fn image(source: impl Into<String>, width: f32, height: f32) -> Self {
        let (w, h) = (width / 2.0, height / 2.0);
        let corners = vec![
            Point::new(-w, -h),
            Point::new(w, -h),
            Point::new(w, h),
            Point::new(-w, h),
        ];
        let path = Path::new(corners).expect("an image rectangle has four corners");
        Self::from_node(DiagramNode::new(
            Shape::Image {
                path,
                image: ImageData {
                    source: source.into(),
                    size: Size::new(width, height),
                },
            },
            Point::default(),
        ))
    }

    /// Creates multiline text from already styled runs.
    pub fn multiline(runs: Vec<TextRun>) -> Self {
        Self::from_node(DiagramNode::new(
            Shape::MultilineText {
                text: TextData::default(),
                content: MultilineData {
                    runs,
                    scale_factor: 1.0,
                },
            },
            Point::default(),
        ))
    }

    /// Parses `source` as markup and creates multiline text from the runs.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Markup`] with every diagnostic of the parse.
    pub fn multiline_markup(source: &str, line_spacing: Option<&str>) -> Result<Self, FiguraError> {
        let runs = figura_markup::parse(source, line_spacing)
            .map_err(|err| FiguraError::new_markup_error(err, source))?;
        Ok(Self::multiline(runs))
    }

    pub(crate) fn group(children: Vec<Diagram>, origin: Point, mutable: bool) -> Self {
        let mut node = DiagramNode::new(Shape::Group(children), origin);
        node.mutable = mutable;
        Self::from_node(node)
    }
}

// =============================================================================
// Queries
// =============================================================================

impl Diagram {
    pub fn variant(&self) -> Variant {
        self.inner.borrow().variant()
    }

    /// The reference point used for positioning and composition.
    pub fn origin(&self) -> Point {
        self.inner.borrow().origin
    }

    pub fn style(&self) -> Style {
        self.inner.borrow().style.clone()
    }

    /// Text attributes of Text and MultilineText nodes.
    pub fn text_data(&self) -> Option<TextData> {
        match &self.inner.borrow().shape {
            Shape::Text(text) | Shape::MultilineText { text, .. } => Some(text.clone()),
            _ => None,
        }
    }

    pub fn multiline_data(&self) -> Option<MultilineData> {
        match &self.inner.borrow().shape {
            Shape::MultilineText { content, .. } => Some(content.clone()),
            _ => None,
        }
    }

    pub fn image_data(&self) -> Option<ImageData> {
        match &self.inner.borrow().shape {
            Shape::Image { image, .. } => Some(image.clone()),
            _ => None,
        }
    }

    /// The path of Polygon, Curve and Image nodes.
    pub fn path(&self) -> Option<Path> {
        self.inner.borrow().shape.path().cloned()
    }

    /// Handles to the children of a Group, in order. Empty for other variants.
    pub fn children(&self) -> Vec<Diagram> {
        self.inner
            .borrow()
            .shape
            .children()
            .iter()
            .map(Diagram::share)
            .collect()
    }

    pub fn tags(&self) -> BTreeSet<String> {
        self.inner.borrow().tags.clone()
    }

    /// Returns true if operations edit this node in place.
    pub fn is_mutable(&self) -> bool {
        self.inner.borrow().mutable
    }

    /// Returns true if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Diagram) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

// =============================================================================
// Value Regimes
// =============================================================================

impl Diagram {
    /// Another handle to the same node.
    pub(crate) fn share(&self) -> Diagram {
        Diagram {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Deep copy of the subtree. Flags are preserved.
    pub fn copy(&self) -> Diagram {
        let node = self.inner.borrow();
        let shape = match &node.shape {
            Shape::Group(children) => Shape::Group(children.iter().map(Diagram::copy).collect()),
            shape => shape.shallow_clone(),
        };
        Diagram::from_node(node.with_shape(shape))
    }

    /// The node itself when mutable, a deep copy otherwise.
    pub(crate) fn copy_if_not_mutable(&self) -> Diagram {
        if self.is_mutable() {
            self.share()
        } else {
            self.copy()
        }
    }

    /// Like [`Diagram::copy_if_not_mutable`], but inside a subtree that was
    /// already copied (`fresh`) the node is owned and used as is.
    ///
    /// Returns the resolved node and whether its subtree is fresh.
    fn resolve(&self, fresh: bool) -> (Diagram, bool) {
        if fresh || self.is_mutable() {
            (self.share(), fresh)
        } else {
            (self.copy(), true)
        }
    }

    /// Puts the whole subtree in the mutable regime.
    ///
    /// The input is always copied; the copy is what becomes mutable.
    pub fn mutable(&self) -> Diagram {
        debug!(variant:? = self.variant(); "Making diagram mutable");
        self.copy().rewrite_from(true, &|_| true, &|node| node.set_mutable(true))
    }

    /// Puts a copy of the whole subtree in the immutable regime.
    pub fn immutable(&self) -> Diagram {
        debug!(variant:? = self.variant(); "Making diagram immutable");
        self.copy().rewrite_from(true, &|_| true, &|node| node.set_mutable(false))
    }

    /// Marks only the root of a copy mutable; children keep their regime.
    pub fn mutable_parent_only(&self) -> Diagram {
        let node = self.copy();
        node.inner.borrow_mut().set_mutable(true);
        node
    }

    /// Applies `edit` to this node only, after resolving its regime.
    pub(crate) fn edit(&self, edit: impl FnOnce(&mut DiagramNode)) -> Diagram {
        let node = self.copy_if_not_mutable();
        edit(&mut node.inner.borrow_mut());
        node
    }

    /// Pre-order fold over the subtree: every node is resolved, rewritten in
    /// place if it matches `predicate`, then its children are folded and put
    /// back.
    pub(crate) fn rewrite(
        &self,
        predicate: &dyn Fn(&DiagramNode) -> bool,
        rewrite: &dyn Fn(&mut DiagramNode),
    ) -> Diagram {
        self.rewrite_from(false, predicate, rewrite)
    }

    fn rewrite_from(
        &self,
        fresh: bool,
        predicate: &dyn Fn(&DiagramNode) -> bool,
        rewrite: &dyn Fn(&mut DiagramNode),
    ) -> Diagram {
        let (node, fresh) = self.resolve(fresh);
        {
            let mut inner = node.inner.borrow_mut();
            if predicate(&inner) {
                rewrite(&mut inner);
            }
        }

        let children = node.children();
        if !children.is_empty() {
            let rewritten = children
                .iter()
                .map(|child| child.rewrite_from(fresh, predicate, rewrite))
                .collect();
            node.replace_children(rewritten);
        }
        node
    }

    /// Read-only pre-order walk over the subtree.
    pub(crate) fn visit(&self, visitor: &mut dyn FnMut(&Diagram)) {
        visitor(self);
        for child in self.children() {
            child.visit(visitor);
        }
    }

    fn replace_children(&self, children: Vec<Diagram>) {
        if let Shape::Group(list) = &mut self.inner.borrow_mut().shape {
            *list = children;
        }
    }

    /// Runs `f` once on the resolved node.
    pub fn apply(&self, f: impl FnOnce(Diagram) -> Diagram) -> Diagram {
        f(self.copy_if_not_mutable())
    }

    /// Runs `f` on the node, then on every descendant of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use figura::{Diagram, combine};
    /// # use figura_core::geometry::Point;
    /// let a = Diagram::curve(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap();
    /// let b = Diagram::text("label");
    /// let group = combine([&a, &b]);
    ///
    /// let hidden = group.apply_recursive(|d| d.opacity(0.0));
    /// assert!(hidden.children().iter().all(|d| d.style().opacity == Some(0.0)));
    /// ```
    pub fn apply_recursive(&self, f: impl Fn(Diagram) -> Diagram) -> Diagram {
        self.apply_where(false, &|_| true, &f)
    }

    /// Like [`Diagram::apply_recursive`], but `f` only fires on nodes carrying
    /// every tag in `tags`. The walk still visits every descendant.
    pub fn apply_to_tagged_recursive(
        &self,
        tags: &[&str],
        f: impl Fn(Diagram) -> Diagram,
    ) -> Diagram {
        self.apply_where(false, &|d: &Diagram| d.contains_all_tags(tags), &f)
    }

    fn apply_where(
        &self,
        fresh: bool,
        predicate: &dyn Fn(&Diagram) -> bool,
        f: &dyn Fn(Diagram) -> Diagram,
    ) -> Diagram {
        let (resolved, fresh) = self.resolve(fresh);
        let (result, fresh) = if predicate(&resolved) {
            let mapped = f(resolved.share());
            let still_fresh = fresh && mapped.ptr_eq(&resolved);
            (mapped, still_fresh)
        } else {
            (resolved, fresh)
        };

        let children = result.children();
        if children.is_empty() {
            return result;
        }

        let mapped: Vec<Diagram> = children
            .iter()
            .map(|child| child.apply_where(fresh, predicate, f))
            .collect();

        if fresh || result.is_mutable() {
            result.replace_children(mapped);
            result
        } else {
            let node = result.inner.borrow().with_shape(Shape::Group(mapped));
            Diagram::from_node(node)
        }
    }
}

impl PartialEq for Diagram {
    /// Structural equality over the whole subtree.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.inner.borrow() == *other.inner.borrow()
    }
}
