//! Named image storage.

use std::collections::HashMap;

use crate::grid::PixelGrid;

/// Images addressed by name. Inserting under an existing name replaces it.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    images: HashMap<String, PixelGrid>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `grid` as `name`, returning the image it replaced.
    pub fn insert(&mut self, name: impl Into<String>, grid: PixelGrid) -> Option<PixelGrid> {
        self.images.insert(name.into(), grid)
    }

    pub fn get(&self, name: &str) -> Option<&PixelGrid> {
        self.images.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<PixelGrid> {
        self.images.remove(name)
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Stored names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
