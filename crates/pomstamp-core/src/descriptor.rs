//! Maven project descriptor: load, validate, inspect, mutate, write
//!
//! The descriptor is held as a mutable XML tree for the duration of one run.
//! Parsing rejects malformed markup before any field is inspected; the write
//! step serializes the whole tree back pretty-printed, so the only observable
//! change is the one text node the pipeline replaces.

use crate::error::StampError;
use std::fs;
use std::path::{Path, PathBuf};
use xmltree::{Element, EmitterConfig, XMLNode};

/// Descriptor file name, fixed relative to the repository root
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// A parsed `pom.xml` bound to its on-disk path
#[derive(Debug)]
pub struct Descriptor {
    path: PathBuf,
    root: Element,
}

impl Descriptor {
    /// Load and validate `{repo_root}/pom.xml`
    ///
    /// Fails with [`StampError::NotFound`] when the file is absent,
    /// [`StampError::Io`] on any other read error and
    /// [`StampError::Syntax`] when the text is not well-formed XML.
    pub fn load(repo_root: &Path) -> Result<Self, StampError> {
        let path = repo_root.join(DESCRIPTOR_FILE);
        let text = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StampError::NotFound { path: path.clone() }
            } else {
                StampError::io(&path, e)
            }
        })?;
        Self::parse(path, &text)
    }

    /// Parse descriptor text already read from `path`
    ///
    /// Never attempts partial recovery: malformed markup is always fatal.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self, StampError> {
        let path = path.into();
        let root = Element::parse(text.as_bytes())
            .map_err(|e| StampError::syntax(&path, e.to_string()))?;
        Ok(Self { path, root })
    }

    /// Path the descriptor was loaded from and will be written back to
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tag name of the document root (e.g. `project`)
    #[inline]
    #[must_use]
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// First direct child of the root with the given tag, resolved against
    /// the document's default namespace
    ///
    /// A child declared under the default `xmlns` carries the same namespace
    /// URI as the root, so matching tag and namespace together keeps lookups
    /// correct whether or not the document declares one.
    fn child(&self, tag: &str) -> Option<&Element> {
        let ns = self.root.namespace.as_deref();
        self.root
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .find(|el| el.name == tag && el.namespace.as_deref() == ns)
    }

    fn child_mut(&mut self, tag: &str) -> Option<&mut Element> {
        let ns = self.root.namespace.clone();
        self.root
            .children
            .iter_mut()
            .filter_map(XMLNode::as_mut_element)
            .find(|el| el.name == tag && el.namespace == ns)
    }

    /// Text content of the mandatory `version` field
    ///
    /// Absence of the field is fatal on the caller's side: no artifact path
    /// or snapshot gate can be computed without it.
    pub fn version(&self) -> Result<String, StampError> {
        self.child("version")
            .map(element_text)
            .ok_or(StampError::MissingVersionField)
    }

    /// Text content of the optional `artifactId` field
    ///
    /// Callers substitute an empty string when absent.
    #[must_use]
    pub fn artifact_id(&self) -> Option<String> {
        self.child("artifactId").map(element_text)
    }

    /// Replace the text of the `version` field
    ///
    /// Mutates exactly the one text node; every other node in the tree is
    /// left untouched.
    pub fn set_version(&mut self, text: &str) -> Result<(), StampError> {
        let version = self
            .child_mut("version")
            .ok_or(StampError::MissingVersionField)?;
        version
            .children
            .retain(|node| !matches!(node, XMLNode::Text(_) | XMLNode::CData(_)));
        version.children.push(XMLNode::Text(text.to_string()));
        Ok(())
    }

    /// Serialize the tree pretty-printed
    pub fn to_xml_string(&self) -> Result<String, StampError> {
        let mut buf = Vec::new();
        let config = EmitterConfig::new().perform_indent(true);
        self.root
            .write_with_config(&mut buf, config)
            .map_err(|e| StampError::io(&self.path, std::io::Error::other(e.to_string())))?;
        String::from_utf8(buf)
            .map_err(|e| StampError::io(&self.path, std::io::Error::other(e.to_string())))
    }

    /// Write the tree back to the original path, overwriting in place
    ///
    /// Serialization happens into a buffer first, so a serialization failure
    /// leaves the on-disk file untouched.
    pub fn write(&self) -> Result<(), StampError> {
        let text = self.to_xml_string()?;
        fs::write(&self.path, text).map_err(|e| StampError::io(&self.path, e))
    }
}

/// Concatenated text content of an element's direct text children
fn element_text(el: &Element) -> String {
    el.children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Text(t) | XMLNode::CData(t) => Some(t.as_str()),
            _ => None,
        })
        .collect()
}
