//! XML documents as [`DocumentNode`] trees, backed by `roxmltree`.
//!
//! roxmltree keeps attributes as data on their element rather than as nodes,
//! so [`XmlNode`] adds an attribute variant addressed by owner and index.

use grovepath_types::{DocumentNode, NodeCategory, QName};
use roxmltree::Node;
use std::hash::{Hash, Hasher};
use thiserror::Error;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML parse error: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// A parsed, read-only XML document.
pub struct XmlDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> XmlDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, XmlError> {
        let doc = roxmltree::Document::parse(text)?;
        log::debug!("Parsed XML document with {} nodes", doc.descendants().count());
        Ok(Self { doc })
    }

    /// The document node. Traversals started here begin at the document element.
    pub fn root(&self) -> XmlNode<'_, 'input> {
        XmlNode::Node(self.doc.root())
    }

    pub fn document_element(&self) -> XmlNode<'_, 'input> {
        XmlNode::Node(self.doc.root_element())
    }
}

/// Either a tree node (element, text, comment, ...) or an attribute of an element.
#[derive(Debug, Clone, Copy)]
pub enum XmlNode<'a, 'input> {
    Node(Node<'a, 'input>),
    /// An attribute, represented by its owning element and the attribute index.
    Attribute {
        owner: Node<'a, 'input>,
        index: usize,
    },
}

impl<'a, 'input> XmlNode<'a, 'input> {
    /// The underlying roxmltree node, unless this is an attribute.
    pub fn inner(&self) -> Option<Node<'a, 'input>> {
        match self {
            XmlNode::Node(node) => Some(*node),
            XmlNode::Attribute { .. } => None,
        }
    }

    /// Value of the named attribute on an element.
    pub fn attribute(&self, local_name: &str) -> Option<&'a str> {
        self.inner().and_then(|node| node.attribute(local_name))
    }
}

impl PartialEq for XmlNode<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (XmlNode::Node(a), XmlNode::Node(b)) => a == b,
            (
                XmlNode::Attribute {
                    owner: o1,
                    index: i1,
                },
                XmlNode::Attribute {
                    owner: o2,
                    index: i2,
                },
            ) => o1 == o2 && i1 == i2,
            _ => false,
        }
    }
}

impl Eq for XmlNode<'_, '_> {}

impl Hash for XmlNode<'_, '_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            XmlNode::Node(node) => {
                0u8.hash(state);
                node.id().hash(state);
            }
            XmlNode::Attribute { owner, index } => {
                1u8.hash(state);
                owner.id().hash(state);
                index.hash(state);
            }
        }
    }
}

impl<'a> DocumentNode<'a> for XmlNode<'a, 'a> {
    fn category(&self) -> NodeCategory {
        match self {
            XmlNode::Node(node) => match node.node_type() {
                roxmltree::NodeType::Root => NodeCategory::Document,
                roxmltree::NodeType::Element => NodeCategory::Element,
                roxmltree::NodeType::Text => NodeCategory::Text,
                roxmltree::NodeType::Comment => NodeCategory::Comment,
                roxmltree::NodeType::PI => NodeCategory::ProcessingInstruction,
            },
            XmlNode::Attribute { .. } => NodeCategory::Attribute,
        }
    }

    fn name(&self) -> Option<QName<'a>> {
        match self {
            XmlNode::Node(node) => {
                if node.is_element() {
                    Some(QName {
                        prefix: None,
                        local_part: node.tag_name().name(),
                    })
                } else {
                    node.pi().map(|pi| QName {
                        prefix: None,
                        local_part: pi.target,
                    })
                }
            }
            XmlNode::Attribute { owner, index } => owner.attributes().nth(*index).map(|attr| {
                let prefix = (attr.namespace() == Some(XML_NAMESPACE)).then_some("xml");
                QName {
                    prefix,
                    local_part: attr.name(),
                }
            }),
        }
    }

    fn string_value(&self) -> String {
        match self {
            XmlNode::Node(node) => match node.node_type() {
                roxmltree::NodeType::Root | roxmltree::NodeType::Element => node
                    .descendants()
                    .filter(|n| n.is_text())
                    .filter_map(|n| n.text())
                    .collect(),
                roxmltree::NodeType::Text | roxmltree::NodeType::Comment => {
                    node.text().unwrap_or_default().to_string()
                }
                roxmltree::NodeType::PI => node
                    .pi()
                    .and_then(|pi| pi.value)
                    .unwrap_or_default()
                    .to_string(),
            },
            XmlNode::Attribute { owner, index } => owner
                .attributes()
                .nth(*index)
                .map(|attr| attr.value().to_string())
                .unwrap_or_default(),
        }
    }

    fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        match self {
            XmlNode::Node(node) if node.is_element() => {
                let owner = *node;
                let count = node.attributes().len();
                Box::new((0..count).map(move |index| XmlNode::Attribute { owner, index }))
            }
            _ => Box::new(std::iter::empty()),
        }
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        match self {
            XmlNode::Node(node) => Box::new(node.children().map(XmlNode::Node)),
            XmlNode::Attribute { .. } => Box::new(std::iter::empty()),
        }
    }

    fn parent(&self) -> Option<Self> {
        match self {
            XmlNode::Node(node) => node.parent().map(XmlNode::Node),
            XmlNode::Attribute { owner, .. } => Some(XmlNode::Node(*owner)),
        }
    }
}
