//! TableNow demo binary
//!
//! Wires the catalog and store into the process context, then walks a
//! browse → check availability → book → cancel flow against local storage.

use anyhow::Context;
use tablenow_app::booking::{self, BookingRequest};
use tablenow_app::catalog::{Catalog, FilterCriteria, SortBy, filter_restaurants, paginate};
use tablenow_app::config::AppConfig;
use tablenow_app::context::AppContext;
use tablenow_app::paths::StoragePaths;
use tablenow_app::storage::Storage;
use tablenow_app::store::AppStore;
use tablenow_app::availability;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(data_dir = %config.data_dir, environment = %config.environment, "Starting TableNow");

    let storage = Storage::open(StoragePaths::new(&config.data_dir))
        .with_context(|| format!("opening storage at {}", config.data_dir))?;
    let store = AppStore::load(storage);
    let catalog = Catalog::from_seed();
    let ctx = AppContext::new(catalog, store)
        .install()
        .map_err(|_| anyhow::anyhow!("app context installed twice"))?;

    // Browse: top-rated moderate restaurants, first page
    let criteria = FilterCriteria {
        sort_by: SortBy::Rating,
        ..Default::default()
    };
    let results = filter_restaurants(ctx.catalog().restaurants(), &criteria);
    let page = paginate(&results, 1, 5);
    println!(
        "Top rated ({} of {} restaurants):",
        page.data.len(),
        page.total
    );
    for restaurant in &page.data {
        println!(
            "  {} — {} {} ({:.1}★, {} reviews, {} mi)",
            restaurant.name,
            restaurant.cuisine,
            restaurant.price_range,
            restaurant.rating,
            restaurant.review_count,
            restaurant.distance
        );
    }

    // Availability for the top pick today
    let top = &page.data[0];
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let slots = availability::available_slots(&top.id, &today);
    println!(
        "\n{} has {} open slots on {} (first: {})",
        top.name,
        slots.len(),
        today,
        slots.first().map(String::as_str).unwrap_or("none")
    );

    // Book the first open slot
    let mut store = ctx.store();
    let reservation = booking::book(
        &mut store,
        BookingRequest {
            restaurant_id: top.id.clone(),
            date: today,
            time: slots.first().cloned().unwrap_or_else(|| "19:00".into()),
            party_size: 2,
            special_requests: String::new(),
            phone: "5551234567".into(),
        },
    )?;
    println!(
        "\nBooked {} — confirmation {}",
        reservation.id, reservation.reservation_number
    );

    // And cancel it again
    store.cancel_reservation(&reservation.id);
    println!(
        "Cancelled. {} reservation(s) on file for {}.",
        store.reservations().len(),
        store.user().name
    );

    Ok(())
}
