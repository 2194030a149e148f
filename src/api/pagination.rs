//! Page-number pagination for the directory list.
//!
//! # Purpose
//! Parses `page`/`page_size` query parameters, computes the `[start, end)`
//! window into the creation-ordered collection, and builds the `next` and
//! `previous` links.
//!
//! # Key invariants
//! - `page >= 1` and `1 <= page_size <= max_page_size`; anything else is a 400.
//!   The cap is only set when configured; by default any positive size is accepted.
//! - Window arithmetic saturates, so huge pages yield an empty result rather
//!   than an overflow.
use crate::api::error::{ApiError, api_validation_error};
use crate::api::types::DirectoryListResponse;
use crate::config::PaginationConfig;
use crate::model::Directory;
use crate::store::Page;
use std::collections::HashMap;

const LIST_PATH: &str = "/directories/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn from_query(
        params: &HashMap<String, String>,
        config: &PaginationConfig,
    ) -> Result<Self, ApiError> {
        let page = positive_param(params, "page", 1)?;
        let page_size = positive_param(params, "page_size", config.default_page_size)?;
        if page_size > config.max_page_size {
            return Err(api_validation_error(&format!(
                "`page_size` must not exceed {}",
                config.max_page_size
            )));
        }
        Ok(Self { page, page_size })
    }

    /// Index range `[start, end)` of this page.
    pub fn window(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size);
        (to_index(start), to_index(end))
    }

    pub fn into_list_response(self, page: Page<Directory>) -> DirectoryListResponse {
        let (start, end) = self.window();
        let next = (end < page.count).then(|| self.link(self.page.saturating_add(1)));
        let previous = (start > 0).then(|| self.link(self.page - 1));
        DirectoryListResponse {
            count: page.count,
            next,
            previous,
            results: page.items,
        }
    }

    fn link(&self, page: u64) -> String {
        format!("{LIST_PATH}?page={page}&page_size={}", self.page_size)
    }
}

fn positive_param(
    params: &HashMap<String, String>,
    name: &str,
    default: u64,
) -> Result<u64, ApiError> {
    let Some(raw) = params.get(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(api_validation_error(&format!(
            "`{name}` must be a positive integer"
        ))),
    }
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
