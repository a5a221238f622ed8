use ahash::AHashMap;
use std::sync::RwLock;

use crate::error::DocumentError;

/// The host side of the page: something that owns elements by id and lets a
/// caller swap out everything inside one of them.
pub trait Document: Send + Sync {
    /// Replace the full content of `element_id`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no element with that id exists
    fn replace_inner_html(&self, element_id: &str, html: String) -> Result<(), DocumentError>;
}

#[derive(Debug, Default, Clone)]
struct Element {
    inner_html: String,
    writes: usize,
}

/// In-memory host document. Elements exist only once declared, mirroring a
/// page whose markup already contains the target region.
#[derive(Debug, Default)]
pub struct PageDocument {
    elements: RwLock<AHashMap<String, Element>>,
}

impl PageDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element(element_id: &str) -> Self {
        let doc = Self::new();
        doc.declare_element(element_id);
        doc
    }

    pub fn declare_element(&self, element_id: &str) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.entry(element_id.to_string()).or_default();
    }

    #[must_use]
    pub fn inner_html(&self, element_id: &str) -> Option<String> {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.get(element_id).map(|el| el.inner_html.clone())
    }

    /// How many times the element's content has been replaced.
    #[must_use]
    pub fn write_count(&self, element_id: &str) -> usize {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.get(element_id).map_or(0, |el| el.writes)
    }
}

impl Document for PageDocument {
    fn replace_inner_html(&self, element_id: &str, html: String) -> Result<(), DocumentError> {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        let element = elements
            .get_mut(element_id)
            .ok_or_else(|| DocumentError::MissingElement(element_id.to_string()))?;
        element.inner_html = html;
        element.writes += 1;
        Ok(())
    }
}
