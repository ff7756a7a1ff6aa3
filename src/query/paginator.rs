/// Splits a view into fixed-size, 1-based pages
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
    page_count: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        // A zero page size would never make progress; treat it as one page
        let page_size = if page_size == 0 {
            items.len().max(1)
        } else {
            page_size
        };
        let page_count = items.len().div_ceil(page_size);

        Paginator {
            items,
            page_size,
            page_count,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Items of page `page`, or `None` when out of range
    pub fn page(&self, page: usize) -> Option<&'a [T]> {
        if page == 0 || page > self.page_count {
            return None;
        }

        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        Some(&self.items[start..end])
    }

    /// All pages in order
    pub fn pages(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        (1..=self.page_count).filter_map(move |n| self.page(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_case() {
        let items: Vec<u32> = (1..=13).collect();
        let paginator = Paginator::new(&items, 3);
        assert_eq!(paginator.page_count(), 5);
        assert_eq!(paginator.page(1), Some(&[1, 2, 3][..]));
        assert_eq!(paginator.page(4), Some(&[10, 11, 12][..]));
        assert_eq!(paginator.page(5), Some(&[13][..]));

        assert_eq!(paginator.page(0), None);
        assert_eq!(paginator.page(6), None);
        assert_eq!(paginator.pages().count(), 5);
    }

    #[test]
    fn test_empty() {
        let items: Vec<u32> = vec![];
        let paginator = Paginator::new(&items, 3);
        assert_eq!(paginator.page_count(), 0);
        assert_eq!(paginator.page(1), None);
        assert_eq!(paginator.pages().count(), 0);
    }

    #[test]
    fn test_zero_page_size() {
        let items = vec!["a", "b"];
        let paginator = Paginator::new(&items, 0);
        assert_eq!(paginator.page_count(), 1);
        assert_eq!(paginator.page(1), Some(&["a", "b"][..]));
    }
}
