//! Page requests and page results shared by every listable collection.

use serde::Serialize;
use thiserror::Error;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Invalid pagination parameters: page must be >= 0 (got {0})")]
    NegativePage(i64),
    #[error("Invalid pagination parameters: page must be at most {max} (got {0})", max = u32::MAX)]
    PageTooLarge(i64),
    #[error("Invalid pagination parameters: size must be between 1 and 100 (got {0})")]
    SizeOutOfRange(i64),
}

/// A validated `(page_number, page_size)` pair.
///
/// Only constructible through [`PageRequest::new`], so holding one means the
/// bounds have already been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, PageError> {
        if page_number < 0 {
            return Err(PageError::NegativePage(page_number));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(PageError::SizeOutOfRange(page_size));
        }
        let page_number =
            u32::try_from(page_number).map_err(|_| PageError::PageTooLarge(page_number))?;
        Ok(Self {
            page_number,
            page_size: page_size as u32,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }
}

/// One page of a listing plus enough totals to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.page_size);
        Self {
            items,
            page_number: request.page_number,
            page_size: request.page_size,
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page_number) + 1 >= self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
