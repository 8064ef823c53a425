//! Content units: one piece of content flowing through the pipeline.

use super::metadata::Metadata;

/// One item of content, identified by a stable id and carrying metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentUnit {
    source_id: String,
    /// Source path relative to the content root (e.g. `blog/index.md`)
    relative_path: String,
    data: Metadata,
}

impl ContentUnit {
    pub fn new(
        source_id: impl Into<String>,
        relative_path: impl Into<String>,
        data: Metadata,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            relative_path: relative_path.into(),
            data,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub const fn data(&self) -> &Metadata {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Metadata {
        &mut self.data
    }

    /// Copy this unit under a new id.
    ///
    /// The copy owns its metadata; mutating it leaves `self` untouched.
    pub fn duplicate(&self, new_id: impl Into<String>) -> Self {
        Self {
            source_id: new_id.into(),
            relative_path: self.relative_path.clone(),
            data: self.data.clone(),
        }
    }
}
