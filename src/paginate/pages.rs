//! Ordered set of generated pages.

use crate::content::{ContentUnit, PageInfo};
use std::ops::Index;

/// Pages generated from one source, in page order.
///
/// Neighbour links in each page's [`PageInfo`] are indices into this set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pages {
    pub items: Vec<ContentUnit>,
}

impl Pages {
    pub const fn new(items: Vec<ContentUnit>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ContentUnit> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentUnit> {
        self.items.iter()
    }

    /// Page preceding the page at `index`.
    pub fn previous(&self, index: usize) -> Option<&ContentUnit> {
        self.info(index)?.previous_page.and_then(|i| self.get(i))
    }

    /// Page following the page at `index`.
    pub fn next(&self, index: usize) -> Option<&ContentUnit> {
        self.info(index)?.next_page.and_then(|i| self.get(i))
    }

    fn info(&self, index: usize) -> Option<&PageInfo> {
        self.get(index)?.data().pagination()
    }

    pub fn into_vec(self) -> Vec<ContentUnit> {
        self.items
    }
}

impl Index<usize> for Pages {
    type Output = ContentUnit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for Pages {
    type Item = ContentUnit;
    type IntoIter = std::vec::IntoIter<ContentUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a ContentUnit;
    type IntoIter = std::slice::Iter<'a, ContentUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
