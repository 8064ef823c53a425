//! Previous/next wiring between generated pages.

use crate::content::ContentUnit;

/// Point each page at its neighbours by index into `pages`.
///
/// The first page has no previous page and the last has no next page.
pub fn link(pages: &mut [ContentUnit]) {
    let len = pages.len();
    for (i, page) in pages.iter_mut().enumerate() {
        if let Some(info) = page.data_mut().pagination_mut() {
            info.previous_page = i.checked_sub(1);
            info.next_page = (i + 1 < len).then_some(i + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Metadata, PageInfo};

    fn pages(n: usize) -> Vec<ContentUnit> {
        (1..=n)
            .map(|page| {
                let mut unit = ContentUnit::new(format!("blog.md:page={page}"), "blog.md", Metadata::new());
                unit.data_mut().set_pagination(PageInfo {
                    items: Vec::new(),
                    page,
                    total_pages: n,
                    total_items: 0,
                    previous_page: None,
                    next_page: None,
                });
                unit
            })
            .collect()
    }

    fn neighbours(page: &ContentUnit) -> (Option<usize>, Option<usize>) {
        let info = page.data().pagination().unwrap();
        (info.previous_page, info.next_page)
    }

    #[test]
    fn test_link_chain() {
        let mut pages = pages(4);
        link(&mut pages);

        assert_eq!(neighbours(&pages[0]), (None, Some(1)));
        assert_eq!(neighbours(&pages[3]), (Some(2), None));
        for i in 0..3 {
            assert_eq!(neighbours(&pages[i]).1, Some(i + 1));
            assert_eq!(neighbours(&pages[i + 1]).0, Some(i));
        }
    }

    #[test]
    fn test_link_single_page() {
        let mut pages = pages(1);
        link(&mut pages);
        assert_eq!(neighbours(&pages[0]), (None, None));
    }

    #[test]
    fn test_link_empty_is_noop() {
        let mut pages: Vec<ContentUnit> = Vec::new();
        link(&mut pages);
        assert!(pages.is_empty());
    }
}
