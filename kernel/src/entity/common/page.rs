use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const LAST_PAGE: &str = "last";

/// Requested page of a listing, 1-based. `Last` resolves against the total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageNumber {
    Exact(u32),
    Last,
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::Exact(1)
    }
}

impl FromStr for PageNumber {
    type Err = Report<KernelError>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == LAST_PAGE {
            return Ok(Self::Last);
        }
        match value.parse::<u32>() {
            Ok(number) if number >= 1 => Ok(Self::Exact(number)),
            Ok(_) => Err(Report::new(KernelError::NotFound)
                .attach_printable("That page number is less than 1")),
            Err(error) => Err(Report::new(error)
                .change_context(KernelError::NotFound)
                .attach_printable(format!("Page is not 'last', nor can it be converted to an int: {value}"))),
        }
    }
}

impl PageNumber {
    /// Places this request inside a listing of `count` items.
    ///
    /// A listing always has at least one page, so page 1 of an empty listing is valid.
    pub fn resolve(self, count: i64, size: PageSize) -> error_stack::Result<PageWindow, KernelError> {
        let count = count.max(0);
        let per_page = i64::from(size.0);
        let num_pages = ((count + per_page - 1) / per_page).max(1);
        let num_pages = u32::try_from(num_pages).map_err(|error| {
            Report::new(error).change_context(KernelError::Internal)
        })?;
        let number = match self {
            PageNumber::Exact(number) => number,
            PageNumber::Last => num_pages,
        };
        if number == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable("That page number is less than 1"));
        }
        if number > num_pages {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Page {number} contains no results")));
        }
        Ok(PageWindow {
            number,
            num_pages,
            size,
            count,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Sizes below one are raised to one.
    pub const fn new(size: u32) -> Self {
        if size == 0 {
            Self(1)
        } else {
            Self(size)
        }
    }
}

impl AsRef<u32> for PageSize {
    fn as_ref(&self) -> &u32 {
        &self.0
    }
}

/// Row count handed to a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct SelectLimit(i64);

impl SelectLimit {
    pub fn new(value: impl Into<i64>) -> Self {
        SelectLimit(value.into())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct SelectOffset(i64);

impl SelectOffset {
    pub fn new(value: impl Into<i64>) -> Self {
        SelectOffset(value.into())
    }
}

/// A validated page position: which rows to fetch and how the page relates to the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    number: u32,
    num_pages: u32,
    size: PageSize,
    count: i64,
}

impl PageWindow {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn limit(&self) -> SelectLimit {
        SelectLimit::new(self.size.0)
    }

    pub fn offset(&self) -> SelectOffset {
        SelectOffset::new(i64::from(self.number - 1) * i64::from(self.size.0))
    }

    pub fn fill<T>(self, items: Vec<T>) -> Page<T> {
        Page {
            items,
            window: self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    window: PageWindow,
}

impl<T> Page<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn number(&self) -> u32 {
        self.window.number
    }

    pub fn num_pages(&self) -> u32 {
        self.window.num_pages
    }

    pub fn count(&self) -> i64 {
        self.window.count
    }

    pub fn has_next(&self) -> bool {
        self.window.number < self.window.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.window.number > 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            window: self.window,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<Vec<_>, E>>()?,
            window: self.window,
        })
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use crate::entity::{PageNumber, PageSize};
    use crate::KernelError;

    #[test]
    fn empty_listing_has_one_page() {
        let window = PageNumber::Exact(1).resolve(0, PageSize::new(2)).unwrap();
        assert_eq!(window.num_pages(), 1);
        assert_eq!(*window.offset().as_ref(), 0);
        let page = window.fill(Vec::<()>::new());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn page_past_the_end_is_not_found() {
        let error = PageNumber::Exact(3).resolve(4, PageSize::new(2)).unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);
    }

    #[test]
    fn last_resolves_to_final_page() {
        let window = PageNumber::Last.resolve(5, PageSize::new(2)).unwrap();
        assert_eq!(window.number(), 3);
        assert_eq!(*window.offset().as_ref(), 4);
        assert_eq!(*window.limit().as_ref(), 2);
    }

    #[test]
    fn parse_page_parameter() {
        assert_eq!(PageNumber::from_str("2").unwrap(), PageNumber::Exact(2));
        assert_eq!(PageNumber::from_str("last").unwrap(), PageNumber::Last);
        for bad in ["0", "-1", "two", ""] {
            let error = PageNumber::from_str(bad).unwrap_err();
            assert_eq!(*error.current_context(), KernelError::NotFound);
        }
    }

    #[test]
    fn middle_page_links_both_ways() {
        let page = PageNumber::Exact(2)
            .resolve(7, PageSize::new(3))
            .unwrap()
            .fill(vec![4, 5, 6]);
        assert!(page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.num_pages(), 3);
        assert_eq!(page.count(), 7);
    }
}
