use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{RenderError, RenderResult};
use crate::nodes::Node;

/// One rich document: a tree of [`Node`]s under a single root.
///
/// The root is always a `root`-kind node; [`Document::new`] enforces this so
/// downstream code never has to re-check it. Documents are read-only input to
/// the renderer — nothing in this crate mutates one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    root: Node,
}

/// Stored envelope shape: `{ "root": { ... }, ... }`. Extra envelope fields
/// (editor version, selection state) are ignored.
#[derive(Deserialize)]
struct DocumentEnvelope {
    root: Node,
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = DocumentEnvelope::deserialize(deserializer)?;
        Document::new(envelope.root).map_err(D::Error::custom)
    }
}

impl Document {
    /// Wrap a root node. Errors unless the node's kind is `root`.
    pub fn new(root: Node) -> RenderResult<Self> {
        if matches!(root, Node::Root(_)) {
            Ok(Document { root })
        } else {
            Err(RenderError::NotARootNode {
                found: root.kind_name().to_string(),
            })
        }
    }

    /// Deserialize a root node from its stored JSON value.
    pub fn from_root_value(value: &Value) -> RenderResult<Self> {
        let root: Node = serde_json::from_value(value.clone())?;
        Document::new(root)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True when the root has no children. An empty document is valid and
    /// renders as empty output.
    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{ParagraphNode, TextNode};

    #[test]
    fn non_root_node_is_rejected() {
        let node = Node::Paragraph(ParagraphNode::default());
        assert!(matches!(
            Document::new(node),
            Err(RenderError::NotARootNode { .. })
        ));
    }

    #[test]
    fn envelope_extras_are_ignored() {
        let doc: Document = serde_json::from_str(
            r#"{"root":{"type":"root","children":[]},"lastSaved":1719340000,"version":"0.12.2"}"#,
        )
        .unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn text_nodes_default_missing_fields() {
        let doc: Document = serde_json::from_str(
            r#"{"root":{"type":"root","children":[
                {"type":"paragraph","children":[{"type":"text","text":"hi"}]}
            ]}}"#,
        )
        .unwrap();
        let para = &doc.root().children()[0];
        assert_eq!(
            para.children()[0],
            Node::Text(TextNode {
                text: "hi".into(),
                ..TextNode::default()
            })
        );
    }
}
