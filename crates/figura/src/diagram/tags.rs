//! Tags attached to nodes for later lookup and filtered updates.
//!
//! Tag edits touch the node itself only; use
//! [`Diagram::apply_recursive`] to tag a whole subtree.

use super::Diagram;

impl Diagram {
    pub fn append_tags<I, S>(&self, tags: I) -> Diagram
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edit(|node| node.tags.extend(tags.into_iter().map(Into::into)))
    }

    pub fn remove_tags<I, S>(&self, tags: I) -> Diagram
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.edit(|node| {
            for tag in tags {
                node.tags.remove(tag.as_ref());
            }
        })
    }

    /// Removes every tag of the node.
    pub fn reset_tags(&self) -> Diagram {
        self.edit(|node| node.tags.clear())
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.inner.borrow().tags.contains(tag)
    }

    /// Returns true if the node carries every tag in `tags`. Vacuously true
    /// for no tags.
    pub fn contains_all_tags(&self, tags: &[&str]) -> bool {
        let node = self.inner.borrow();
        tags.iter().all(|tag| node.tags.contains(*tag))
    }
}

#[cfg(test)]
mod tests {
    use figura_core::geometry::Point;

    use super::*;
    use crate::diagram::combine;

    #[test]
    fn test_append_and_remove() {
        let d = Diagram::text("t").append_tags(["a", "b", "c"]);
        assert!(d.contains_all_tags(&["a", "b", "c"]));

        let fewer = d.remove_tags(["b", "missing"]);
        assert!(fewer.contains_all_tags(&["a", "c"]));
        assert!(!fewer.contains_tag("b"));
        assert!(d.contains_tag("b"));
    }

    #[test]
    fn test_reset_tags() {
        let d = Diagram::empty(Point::default()).append_tags(["x"]).reset_tags();
        assert!(d.tags().is_empty());
        assert!(d.contains_all_tags(&[]));
    }

    #[test]
    fn test_tags_are_not_recursive() {
        let group = combine([&Diagram::text("t")]).append_tags(["outer"]);
        assert!(group.contains_tag("outer"));
        assert!(!group.children()[0].contains_tag("outer"));
    }

    #[test]
    fn test_append_is_idempotent() {
        let d = Diagram::text("t").append_tags(["a"]).append_tags([String::from("a")]);
        assert_eq!(d.tags().len(), 1);
    }
}
