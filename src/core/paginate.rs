use serde::Serialize;

/// One page of an offset-sliced list.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice `items` into 1-based pages.
///
/// Page 0 is read as page 1; a page past the end is empty. With no items
/// there is still one (empty) page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);

    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_pages() {
        let v: Vec<u32> = (1..=23).collect();
        let p = paginate(&v, 3, 10);
        assert_eq!(p.items, vec![21, 22, 23]);
        assert_eq!(p.total, 23);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn empty_list_has_one_page() {
        let v: Vec<u32> = Vec::new();
        let p = paginate(&v, 1, 10);
        assert!(p.items.is_empty());
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn out_of_range_pages() {
        let v: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&v, 0, 2).items, vec![1, 2]);
        assert!(paginate(&v, 9, 2).items.is_empty());
    }
}
