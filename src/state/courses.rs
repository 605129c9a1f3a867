//! Course catalog list state with forward-only pagination.
//!
//! DESIGN
//! ======
//! The backend hands out an opaque continuation cursor per page; we keep it
//! verbatim for the next request and append each page's items, so a picker
//! can "load more" without ever re-fetching or overlapping.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::courses::PAGE_SIZE;
use crate::net::types::{Course, CoursePage, Pagination};

/// Paginated course list shared by the builder's course picker.
#[derive(Clone, Debug, Default)]
pub struct CourseListState {
    /// Everything fetched so far, in backend order.
    pub items: Vec<Course>,
    /// Continuation cursor for the next fetch; `None` before the first page
    /// and again once the catalog is exhausted.
    pub cursor: Option<String>,
    /// Zero-based index of the next page to request.
    pub page: u32,
    /// Whether the final page has been absorbed.
    pub exhausted: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl CourseListState {
    /// Pagination input for the next fetch. The cursor from the previous
    /// response is passed back unmodified.
    pub fn next_request(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: PAGE_SIZE,
            last_evaluated_key: self.cursor.clone(),
        }
    }

    /// Fold one fetched page into the list. Items already present (by id)
    /// are skipped so a re-delivered page cannot duplicate entries.
    pub fn absorb_page(&mut self, page: CoursePage) {
        for course in page.courses {
            if !self.items.iter().any(|existing| existing.id == course.id) {
                self.items.push(course);
            }
        }
        self.exhausted = page.pagination.last_evaluated_key.is_none();
        self.cursor = page.pagination.last_evaluated_key;
        self.page = page.pagination.page + 1;
        self.loading = false;
        self.error = None;
    }

    /// Case-insensitive title/description filter for the picker search box.
    pub fn filtered(&self, term: &str) -> Vec<Course> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|course| {
                course.title.to_lowercase().contains(&needle)
                    || course.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
