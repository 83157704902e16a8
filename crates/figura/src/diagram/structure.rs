//! Grouping and ungrouping of diagrams.

use figura_core::geometry::Point;
use log::{debug, trace};

use super::{Diagram, Shape, Variant};

/// Groups `nodes` in order.
///
/// Inputs are copy-resolved, so immutable inputs are copied into the group
/// while mutable ones are adopted as is. The group is mutable only if every
/// input is, and takes its origin from the first input. Without inputs the
/// result is [`Diagram::empty`] at `(0, 0)`.
///
/// # Examples
///
/// ```
/// # use figura::{Diagram, Variant, combine};
/// # use figura_core::geometry::Point;
/// let a = Diagram::text("a").position(Point::new(1.0, 2.0));
/// let b = Diagram::text("b");
///
/// let group = combine([&a, &b]);
/// assert_eq!(group.variant(), Variant::Group);
/// assert_eq!(group.origin(), Point::new(1.0, 2.0));
/// ```
pub fn combine<'a>(nodes: impl IntoIterator<Item = &'a Diagram>) -> Diagram {
    let children: Vec<Diagram> = nodes
        .into_iter()
        .map(Diagram::copy_if_not_mutable)
        .collect();
    let Some(first) = children.first() else {
        trace!("Combining no diagrams");
        return Diagram::empty(Point::default());
    };

    let origin = first.origin();
    let mutable = children.iter().all(Diagram::is_mutable);
    debug!(children = children.len(), mutable; "Combined diagrams");
    Diagram::group(children, origin, mutable)
}

impl Diagram {
    /// Groups this diagram with `others`, this one first.
    pub fn combine<'a>(&'a self, others: impl IntoIterator<Item = &'a Diagram>) -> Diagram {
        combine(std::iter::once(self).chain(others))
    }

    /// Replaces nested groups by their leaves.
    ///
    /// The result is a group whose children are every non-group descendant in
    /// pre-order. Other variants are returned copy-resolved.
    pub fn flatten(&self) -> Diagram {
        let (node, fresh) = self.resolve(false);
        if node.variant() != Variant::Group {
            return node;
        }

        let mut leaves = Vec::new();
        for child in node.children() {
            child.collect_leaves(fresh, &mut leaves);
        }
        debug!(leaves = leaves.len(); "Flattened group");
        node.replace_children(leaves);
        node
    }

    fn collect_leaves(&self, fresh: bool, leaves: &mut Vec<Diagram>) {
        if let Shape::Group(children) = &self.inner.borrow().shape {
            for child in children {
                child.collect_leaves(fresh, leaves);
            }
            return;
        }
        leaves.push(self.resolve(fresh).0);
    }

    /// Handles to every node of the subtree carrying all of `tags`, in
    /// pre-order.
    ///
    /// The handles point into this tree; nothing is copied.
    pub fn collect_tagged(&self, tags: &[&str]) -> Vec<Diagram> {
        let mut found = Vec::new();
        self.visit(&mut |d| {
            if d.contains_all_tags(tags) {
                found.push(d.share());
            }
        });
        trace!(tags:? = tags, found = found.len(); "Collected tagged nodes");
        found
    }
}
