//! Pure view-derivation functions: filter, sort and paginate a generated
//! collection without mutating the source.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, Result};
use crate::model::{Customer, Invoice, InvoiceStatus};

/// Invoice table sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Issued,
    Customer,
    Amount,
    Status,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Issued => "issued",
            SortKey::Customer => "customer",
            SortKey::Amount => "amount",
            SortKey::Status => "status",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "issued" => Ok(SortKey::Issued),
            "customer" => Ok(SortKey::Customer),
            "amount" => Ok(SortKey::Amount),
            "status" => Ok(SortKey::Status),
            _ => Err(DashboardError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDir {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            _ => Err(DashboardError::UnknownSortDir(s.to_string())),
        }
    }
}

/// One page of a collection, carrying the clamped page number so callers can
/// display what was actually returned rather than what was requested.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Keep only invoices with the given status; `None` means no filter. Relative
/// order is preserved either way.
pub fn filter_by_status(invoices: &[Invoice], status: Option<InvoiceStatus>) -> Vec<Invoice> {
    match status {
        Some(s) => invoices.iter().filter(|i| i.status == s).cloned().collect(),
        None => invoices.to_vec(),
    }
}

/// Case-insensitive substring search over customer name and email. A blank or
/// whitespace-only term returns the full collection unchanged.
pub fn search_customers(customers: &[Customer], term: &str) -> Vec<Customer> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return customers.to_vec();
    }
    customers
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&term) || c.email.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Produce a new sequence ordered by the given key and direction. The sort is
/// stable, so ties keep their relative input order. Amounts compare
/// numerically; customer and status compare as case-sensitive strings.
pub fn sort_invoices(invoices: &[Invoice], key: SortKey, dir: SortDir) -> Vec<Invoice> {
    let mut sorted = invoices.to_vec();
    sorted.sort_by(|a, b| {
        let ord = match key {
            SortKey::Issued => a.issued.cmp(&b.issued),
            SortKey::Customer => a.customer.cmp(&b.customer),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
    sorted
}

/// Slice out a 1-indexed page. A request past the last page (or page 0) is
/// silently clamped into `[1, total_pages]` rather than returning an empty
/// page. A zero page size is rejected.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    if page_size == 0 {
        return Err(DashboardError::InvalidPageSize);
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);

    Ok(Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total_items,
    })
}
