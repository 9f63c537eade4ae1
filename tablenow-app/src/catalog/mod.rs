//! Catalog store
//!
//! Read-only collaborator holding the restaurant and review seed data.
//! The core never writes to it; derived views come from the filter engine.

pub mod filter;
pub mod seed;

pub use filter::{FilterCriteria, PaginatedResponse, SortBy, filter_restaurants, paginate};

use shared::models::{Restaurant, Review};

/// Immutable catalog of restaurants and their reviews
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build the catalog from the static seed data
    pub fn from_seed() -> Self {
        Self {
            restaurants: seed::restaurants(),
            reviews: seed::reviews(),
        }
    }

    /// Construct from explicit data (tests, alternative seeds)
    pub fn new(restaurants: Vec<Restaurant>, reviews: Vec<Review>) -> Self {
        Self {
            restaurants,
            reviews,
        }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Reviews for one restaurant, in seed order
    pub fn reviews_for(&self, restaurant_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .collect()
    }
}
