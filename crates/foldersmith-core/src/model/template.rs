/// Nested folder templates.
///
/// A template is an ordered mapping from folder name to [`FolderNode`].
/// Order is declaration order and is preserved everywhere: rendering,
/// materialization, and JSON output all walk siblings in the order they
/// were inserted.
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// One entry in a template: either a leaf folder or a folder with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderNode {
    /// A folder with no sub-folders. Terminates recursion.
    Leaf,
    /// A folder whose children are described by a nested template.
    Nested(FolderTemplate),
}

impl FolderNode {
    /// The nested template, if this node has children.
    pub fn children(&self) -> Option<&FolderTemplate> {
        match self {
            Self::Leaf => None,
            Self::Nested(t) => Some(t),
        }
    }
}

/// Ordered folder-name → node mapping. Names are unique among siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderTemplate {
    entries: Vec<(String, FolderNode)>,
}

impl FolderTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a template whose entries are all leaves.
    pub fn leaves<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(Self::new(), |template, name| template.leaf(name))
    }

    /// Builder: append a leaf folder.
    pub fn leaf(mut self, name: impl Into<String>) -> Self {
        self.insert(name, FolderNode::Leaf);
        self
    }

    /// Builder: append a folder with children.
    pub fn nested(mut self, name: impl Into<String>, children: FolderTemplate) -> Self {
        self.insert(name, FolderNode::Nested(children));
        self
    }

    /// Insert `node` under `name`.
    ///
    /// If `name` already exists among the siblings, its node is replaced in
    /// place (the entry keeps its original position) and the old node is
    /// returned.
    pub fn insert(&mut self, name: impl Into<String>, node: FolderNode) -> Option<FolderNode> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, node)),
            None => {
                self.entries.push((name, node));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FolderNode> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Iterate direct children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FolderNode)> {
        self.entries.iter().map(|(n, node)| (n.as_str(), node))
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of folders at every nesting level.
    pub fn node_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| 1 + node.children().map_or(0, FolderTemplate::node_count))
            .sum()
    }

    /// Deepest nesting level. A template of only leaves has depth 1; an
    /// empty template has depth 0.
    pub fn depth(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| 1 + node.children().map_or(0, FolderTemplate::depth))
            .max()
            .unwrap_or(0)
    }
}

// Leaves serialise as `[]` and nested nodes as objects, so exported plans
// read the same as the hand-written template literals.
impl Serialize for FolderNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf => serializer.serialize_seq(Some(0))?.end(),
            Self::Nested(template) => template.serialize(serializer),
        }
    }
}

impl Serialize for FolderTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FolderTemplate {
        FolderTemplate::new()
            .nested(
                "Media",
                FolderTemplate::new()
                    .nested("Images", FolderTemplate::leaves(["Photos", "Icons"]))
                    .leaf("Audio"),
            )
            .leaf("Inbox")
    }

    #[test]
    fn node_count_sums_every_level() {
        // Media, Images, Photos, Icons, Audio, Inbox
        assert_eq!(sample().node_count(), 6);
        assert_eq!(FolderTemplate::new().node_count(), 0);
    }

    #[test]
    fn depth_counts_nesting_levels() {
        assert_eq!(sample().depth(), 3);
        assert_eq!(FolderTemplate::leaves(["a", "b"]).depth(), 1);
        assert_eq!(FolderTemplate::new().depth(), 0);
    }

    #[test]
    fn iteration_preserves_declaration_order() {
        let t = FolderTemplate::leaves(["Zeta", "Alpha", "Mid"]);
        let names: Vec<&str> = t.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    /// Re-inserting a sibling name replaces the node but keeps its slot.
    #[test]
    fn insert_duplicate_replaces_in_place() {
        let mut t = FolderTemplate::leaves(["A", "B", "C"]);
        let old = t.insert("A", FolderNode::Nested(FolderTemplate::leaves(["X"])));

        assert_eq!(old, Some(FolderNode::Leaf));
        assert_eq!(t.len(), 3);
        let names: Vec<&str> = t.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(t.get("A").and_then(FolderNode::children).is_some());
    }

    #[test]
    fn serialises_leaves_as_empty_arrays() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Media":{"Images":{"Photos":[],"Icons":[]},"Audio":[]},"Inbox":[]}"#
        );
    }
}
