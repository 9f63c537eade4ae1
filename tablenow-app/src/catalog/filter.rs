//! Filter / sort / paginate engine
//!
//! Pure transformation from the full catalog plus a criteria object into an
//! ordered result list. Active filters compose with AND semantics; the
//! multi-valued criteria (cuisines, dietary tags) are each OR within
//! themselves. Sorting happens once, after all filtering, with a stable
//! sort so ties keep their filtered order.

use serde::{Deserialize, Serialize};
use shared::models::{PriceRange, Restaurant};

/// Sort order for the result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Rating, highest first (default)
    #[default]
    Rating,
    /// Parsed distance, nearest first
    Distance,
    /// Price tier, cheapest first
    PriceLow,
    /// Price tier, most expensive first
    PriceHigh,
    /// Review count, most first
    Reviews,
}

/// Filter criteria. All fields optional; `Default` means "no filtering,
/// rating sort".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, cuisine, or address
    pub search_query: String,
    /// OR-matched against the restaurant's cuisine; empty means no filter
    pub selected_cuisines: Vec<String>,
    /// Exact price tier; `None` means no filter
    pub selected_price: Option<PriceRange>,
    /// OR-matched against dietary tags, case-insensitively
    pub selected_dietary: Vec<String>,
    pub sort_by: SortBy,
}

/// Apply criteria to the catalog, returning a filtered and sorted copy
pub fn filter_restaurants(restaurants: &[Restaurant], criteria: &FilterCriteria) -> Vec<Restaurant> {
    let mut filtered: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| matches_search(r, &criteria.search_query))
        .filter(|r| matches_cuisine(r, &criteria.selected_cuisines))
        .filter(|r| matches_price(r, criteria.selected_price))
        .filter(|r| matches_dietary(r, &criteria.selected_dietary))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so ties keep their pre-sort order
    match criteria.sort_by {
        SortBy::Rating => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Distance => {
            filtered.sort_by(|a, b| a.distance_value().total_cmp(&b.distance_value()))
        }
        SortBy::PriceLow => filtered.sort_by_key(|r| r.price_range.tier()),
        SortBy::PriceHigh => filtered.sort_by(|a, b| b.price_range.tier().cmp(&a.price_range.tier())),
        SortBy::Reviews => filtered.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }

    filtered
}

fn matches_search(restaurant: &Restaurant, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    restaurant.name.to_lowercase().contains(&query)
        || restaurant.cuisine.to_lowercase().contains(&query)
        || restaurant.address.to_lowercase().contains(&query)
}

fn matches_cuisine(restaurant: &Restaurant, cuisines: &[String]) -> bool {
    if cuisines.is_empty() {
        return true;
    }
    cuisines
        .iter()
        .any(|c| restaurant.cuisine.eq_ignore_ascii_case(c))
}

fn matches_price(restaurant: &Restaurant, price: Option<PriceRange>) -> bool {
    match price {
        Some(price) => restaurant.price_range == price,
        None => true,
    }
}

fn matches_dietary(restaurant: &Restaurant, dietary: &[String]) -> bool {
    if dietary.is_empty() {
        return true;
    }
    dietary.iter().any(|wanted| {
        restaurant
            .dietary_options
            .iter()
            .any(|option| option.eq_ignore_ascii_case(wanted))
    })
}

/// Paginated result page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    /// Total records across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    pub total_pages: u32,
}

/// Slice a result list into a page.
///
/// Pages are contiguous, non-overlapping sub-ranges; the last page may be
/// partial and an out-of-range page is empty. Derived, never stateful.
pub fn paginate<T: Clone>(items: &[T], page: u32, limit: u32) -> PaginatedResponse<T> {
    let total = items.len() as u64;
    let total_pages = if limit > 0 {
        ((total as f64) / (limit as f64)).ceil() as u32
    } else {
        1
    };

    let start = (page.saturating_sub(1) as usize) * (limit as usize);
    let data = if limit == 0 || start >= items.len() {
        Vec::new()
    } else {
        let end = (start + limit as usize).min(items.len());
        items[start..end].to_vec()
    };

    PaginatedResponse {
        data,
        total,
        page,
        limit,
        total_pages,
    }
}
