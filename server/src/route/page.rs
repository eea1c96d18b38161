use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use application::transfer::PageDto;
use kernel::prelude::entity::PageNumber;
use kernel::KernelError;

/// Reads `?page=`, a positive integer or `last`. Missing or empty means the first page.
pub fn page_number(page: Option<&str>) -> error_stack::Result<PageNumber, KernelError> {
    match page {
        Some(page) if !page.is_empty() => Ok(page.parse::<PageNumber>()?),
        _ => Ok(PageNumber::default()),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageRequest {
    page: Option<String>,
}

impl PageRequest {
    pub fn number(&self) -> error_stack::Result<PageNumber, KernelError> {
        page_number(self.page.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    items: Vec<T>,
    number: u32,
    num_pages: u32,
    count: i64,
    has_next: bool,
    has_previous: bool,
}

impl<T> PageResponse<T> {
    pub fn new<D>(page: PageDto<D>, f: impl FnMut(D) -> T) -> Self {
        Self {
            items: page.items.into_iter().map(f).collect(),
            number: page.number,
            num_pages: page.num_pages,
            count: page.count,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

impl<T: Serialize> IntoResponse for PageResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::PageNumber;
    use kernel::KernelError;

    use crate::route::page::page_number;

    #[test]
    fn page_parameter_forms() {
        assert_eq!(page_number(None).unwrap(), PageNumber::Exact(1));
        assert_eq!(page_number(Some("")).unwrap(), PageNumber::Exact(1));
        assert_eq!(page_number(Some("3")).unwrap(), PageNumber::Exact(3));
        assert_eq!(page_number(Some("last")).unwrap(), PageNumber::Last);
        for bad in ["0", "first", "-2"] {
            let error = page_number(Some(bad)).unwrap_err();
            assert_eq!(*error.current_context(), KernelError::NotFound);
        }
    }
}
