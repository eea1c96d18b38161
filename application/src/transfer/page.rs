use kernel::prelude::entity::Page;

/// One page of a listing plus the navigation facts a client needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub num_pages: u32,
    pub count: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(value: Page<T>) -> Self {
        let number = value.number();
        let num_pages = value.num_pages();
        let count = value.count();
        let has_next = value.has_next();
        let has_previous = value.has_previous();
        Self {
            items: value.into_items(),
            number,
            num_pages,
            count,
            has_next,
            has_previous,
        }
    }
}
