//! Paging through raw rows a fixed number at a time

/// Rows shown per page of raw data
pub const PAGE_SIZE: usize = 5;

/// One window of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPage<'a> {
    /// Index of the first row in the window
    pub start: usize,
    pub rows: &'a [Vec<String>],
}

impl RawPage<'_> {
    /// Index one past the last row in the window
    pub fn end(&self) -> usize {
        self.start + self.rows.len()
    }
}

/// Iterator over consecutive windows of a row slice
///
/// # Examples
/// ```
/// use bikeshare::pager::RawPager;
///
/// let rows: Vec<Vec<String>> = (0..12).map(|i| vec![i.to_string()]).collect();
/// let windows: Vec<(usize, usize)> = RawPager::new(&rows).map(|p| (p.start, p.end())).collect();
/// assert_eq!(windows, vec![(0, 5), (5, 10), (10, 12)]);
/// ```
#[derive(Debug, Clone)]
pub struct RawPager<'a> {
    rows: &'a [Vec<String>],
    offset: usize,
    page_size: usize,
}

impl<'a> RawPager<'a> {
    /// Page through `rows` five at a time from the beginning
    pub fn new(rows: &'a [Vec<String>]) -> Self {
        Self::with_page_size(rows, PAGE_SIZE)
    }

    /// Page through `rows` with a custom window size (at least one row)
    pub fn with_page_size(rows: &'a [Vec<String>], page_size: usize) -> Self {
        Self {
            rows,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// Whether another window is available
    pub fn has_more(&self) -> bool {
        self.offset < self.rows.len()
    }
}

impl<'a> Iterator for RawPager<'a> {
    type Item = RawPage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more() {
            return None;
        }
        let start = self.offset;
        let end = (start + self.page_size).min(self.rows.len());
        self.offset = end;
        Some(RawPage {
            start,
            rows: &self.rows[start..end],
        })
    }
}
