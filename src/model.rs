//! In-memory tree model of a Maven project descriptor.
//!
//! The descriptor is parsed once per task execution and is immutable
//! afterwards. Elements that the Maven schema defines as repeating
//! containers become ordered lists, `<properties>`-style elements become
//! key/value maps, and childless elements become scalar leaves. Module
//! entries stay identifier scalars; child descriptors are never loaded.

use crate::error::ExtractorError;
use roxmltree::Document;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Maven elements whose children form an ordered collection.
const LIST_CONTAINERS: &[&str] = &[
    "dependencies",
    "modules",
    "plugins",
    "exclusions",
    "profiles",
    "licenses",
    "developers",
    "contributors",
    "repositories",
    "pluginRepositories",
    "resources",
    "testResources",
    "goals",
    "filters",
    "executions",
    "mailingLists",
];

/// One node of the parsed descriptor tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    List(Vec<Node>),
    /// Insertion-ordered; Maven's non-repeating elements have unique child
    /// names, so a linear scan is enough for lookup.
    Map(Vec<(String, Node)>),
}

impl Node {
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn index(&self, i: usize) -> Option<&Node> {
        match self {
            Node::List(items) => items.get(i),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// A parsed, immutable project descriptor.
#[derive(Debug, Clone)]
pub struct Descriptor {
    root: Node,
}

impl Descriptor {
    /// Reads and parses the descriptor at `path`.
    ///
    /// A missing file is reported as [`ExtractorError::DescriptorNotFound`]
    /// before any parsing is attempted. Parsing is all-or-nothing; no
    /// partially recovered model is ever returned.
    pub fn from_file(path: &Path) -> Result<Self, ExtractorError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ExtractorError::DescriptorNotFound(path.to_path_buf())
            } else {
                ExtractorError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse(&content)
    }

    /// Parses descriptor text into a tree model.
    pub fn parse(text: &str) -> Result<Self, ExtractorError> {
        let doc =
            Document::parse(text).map_err(|e| ExtractorError::MalformedDescriptor(e.to_string()))?;

        let root = doc.root_element();
        if !root.has_tag_name("project") {
            return Err(ExtractorError::MalformedDescriptor(format!(
                "expected <project> root element, found <{}>",
                root.tag_name().name()
            )));
        }

        Ok(Descriptor {
            root: build_node(root),
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

fn build_node(element: roxmltree::Node<'_, '_>) -> Node {
    let children: Vec<roxmltree::Node<'_, '_>> =
        element.children().filter(|c| c.is_element()).collect();

    if children.is_empty() {
        let text = element.text().map(|t| t.trim().to_string()).unwrap_or_default();
        return Node::Scalar(text);
    }

    if LIST_CONTAINERS.contains(&element.tag_name().name()) {
        return Node::List(children.into_iter().map(build_node).collect());
    }

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        let name = child.tag_name().name().to_string();
        // First occurrence wins; repeated names outside list containers are
        // not valid in the descriptor schema.
        if entries.iter().all(|(k, _): &(String, Node)| *k != name) {
            entries.push((name, build_node(child)));
        }
    }
    Node::Map(entries)
}
