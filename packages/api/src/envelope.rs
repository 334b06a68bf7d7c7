//! # Response envelope and paging types
//!
//! Every backend response is wrapped as `{code, message, data, timestamp}`.
//! Success is `code == 200` inside the body, independent of the HTTP status.
//!
//! List endpoints return one of two page shapes depending on the controller:
//! the backend's own `PageResult` (`records`, `total`, `current`, `size`,
//! `pages`) or Spring Data's `Page` (`content`, `totalElements`, `number`,
//! `size`, `totalPages`). [`Page`] accepts both; Spring's zero-based
//! `number` is shifted to the one-based `current` used everywhere else.

use serde::{Deserialize, Serialize};

pub const SUCCESS_CODE: i64 = 200;

/// `{code, message, data}` wrapper around every response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// One page of records. `current` is one-based.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WirePage<T>")]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub current: u32,
    pub size: u32,
    pub pages: u64,
}

/// Union of both page shapes as they arrive on the wire.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePage<T> {
    records: Option<Vec<T>>,
    content: Option<Vec<T>>,
    total: Option<u64>,
    total_elements: Option<u64>,
    current: Option<u32>,
    number: Option<u32>,
    size: Option<u32>,
    pages: Option<u64>,
    total_pages: Option<u64>,
}

impl<T> From<WirePage<T>> for Page<T> {
    fn from(wire: WirePage<T>) -> Self {
        Self {
            records: wire.records.or(wire.content).unwrap_or_default(),
            total: wire.total.or(wire.total_elements).unwrap_or_default(),
            current: wire
                .current
                .or(wire.number.map(|n| n.saturating_add(1)))
                .unwrap_or(1),
            size: wire.size.unwrap_or_default(),
            pages: wire.pages.or(wire.total_pages).unwrap_or_default(),
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            current: 1,
            size: 10,
            pages: 0,
        }
    }
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        u64::from(self.current) < self.pages
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }
}

/// Paging parameters accepted by every `/list` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    pub order: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

pub const MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_PAGE_SIZE: u32 = 10;

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
            order: "desc".to_string(),
            keyword: None,
        }
    }
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    /// Clamp to the ranges the server accepts.
    pub fn normalized(mut self) -> Self {
        if self.page < 1 {
            self.page = 1;
        }
        if self.size < 1 {
            self.size = DEFAULT_PAGE_SIZE;
        }
        if self.size > MAX_PAGE_SIZE {
            self.size = MAX_PAGE_SIZE;
        }
        let order = self.order.to_ascii_lowercase();
        self.order = if order == "asc" { order } else { "desc".to_string() };
        self.keyword = self.keyword.filter(|k| !k.trim().is_empty());
        self
    }

    /// Row offset of the first record on this page.
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}
