//! Seed data
//!
//! Static catalog the application treats as a read-only external input.
//! Display attributes are derived from the record's index so the catalog is
//! identical on every startup; ratings stay within 1.0-5.0, review counts
//! positive, and distances non-negative, which is all the core relies on.

use shared::models::{PriceRange, Restaurant, Review};

struct SeedRestaurant {
    name: &'static str,
    cuisine: &'static str,
    price_range: PriceRange,
    description: &'static str,
    dietary_options: &'static [&'static str],
    amenities: &'static [&'static str],
}

const SEED_RESTAURANTS: &[SeedRestaurant] = &[
    SeedRestaurant {
        name: "Bella Italia",
        cuisine: "Italian",
        price_range: PriceRange::Moderate,
        description: "Authentic Italian cuisine in a cozy, romantic atmosphere. Handmade pasta and wood-fired pizzas for over 20 years.",
        dietary_options: &["vegetarian", "gluten-free"],
        amenities: &["parking", "wifi", "wheelchair", "outdoor"],
    },
    SeedRestaurant {
        name: "Trattoria Roma",
        cuisine: "Italian",
        price_range: PriceRange::Upscale,
        description: "Classic Roman dishes served in an elegant setting.",
        dietary_options: &["vegetarian"],
        amenities: &["wifi", "wheelchair"],
    },
    SeedRestaurant {
        name: "Pasta Paradise",
        cuisine: "Italian",
        price_range: PriceRange::Budget,
        description: "Quick-service pasta with authentic Italian flavors.",
        dietary_options: &["vegetarian", "vegan"],
        amenities: &["wifi"],
    },
    SeedRestaurant {
        name: "Tuscan Table",
        cuisine: "Italian",
        price_range: PriceRange::Luxury,
        description: "Fine dining Tuscan experience with an extensive wine cellar.",
        dietary_options: &["vegetarian", "gluten-free"],
        amenities: &["parking", "wifi", "wheelchair", "outdoor"],
    },
    SeedRestaurant {
        name: "Tokyo Sushi Bar",
        cuisine: "Japanese",
        price_range: PriceRange::Upscale,
        description: "Premium omakase experience with the freshest fish flown in daily.",
        dietary_options: &["gluten-free"],
        amenities: &["wifi", "wheelchair"],
    },
    SeedRestaurant {
        name: "Sakura Garden",
        cuisine: "Japanese",
        price_range: PriceRange::Moderate,
        description: "Traditional Japanese dining with private tatami rooms and a garden view.",
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        amenities: &["parking", "wifi"],
    },
    SeedRestaurant {
        name: "Ramen House",
        cuisine: "Japanese",
        price_range: PriceRange::Budget,
        description: "Authentic tonkotsu ramen slow-cooked for 18 hours.",
        dietary_options: &["vegetarian"],
        amenities: &["wifi"],
    },
    SeedRestaurant {
        name: "Omakase Dreams",
        cuisine: "Japanese",
        price_range: PriceRange::Luxury,
        description: "Exclusive 8-seat sushi counter with seasonal delicacies.",
        dietary_options: &["gluten-free"],
        amenities: &["wheelchair"],
    },
    SeedRestaurant {
        name: "La Cantina",
        cuisine: "Mexican",
        price_range: PriceRange::Budget,
        description: "Vibrant cantina serving street tacos, fresh guacamole, and over 100 tequilas.",
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        amenities: &["parking", "outdoor", "wifi"],
    },
    SeedRestaurant {
        name: "Casa Oaxaca",
        cuisine: "Mexican",
        price_range: PriceRange::Moderate,
        description: "Regional Oaxacan cuisine featuring mole negro and mezcal tastings.",
        dietary_options: &["vegetarian", "gluten-free"],
        amenities: &["outdoor", "wifi"],
    },
    SeedRestaurant {
        name: "El Mariachi",
        cuisine: "Mexican",
        price_range: PriceRange::Moderate,
        description: "Festive dining with live mariachi music.",
        dietary_options: &["vegetarian", "gluten-free"],
        amenities: &["parking", "outdoor", "wifi", "wheelchair"],
    },
    SeedRestaurant {
        name: "Santorini Blue",
        cuisine: "Greek",
        price_range: PriceRange::Moderate,
        description: "Greek taverna with grilled seafood and flowing ouzo.",
        dietary_options: &["vegetarian", "gluten-free"],
        amenities: &["outdoor", "wifi", "parking"],
    },
    SeedRestaurant {
        name: "Athens Grill",
        cuisine: "Greek",
        price_range: PriceRange::Budget,
        description: "Fast-casual gyros, souvlaki, and salads made fresh.",
        dietary_options: &["vegetarian", "gluten-free"],
        amenities: &["wifi"],
    },
    SeedRestaurant {
        name: "Le Petit Bistro",
        cuisine: "French",
        price_range: PriceRange::Upscale,
        description: "Intimate bistro with seasonal French classics.",
        dietary_options: &["vegetarian"],
        amenities: &["wifi", "outdoor"],
    },
    SeedRestaurant {
        name: "Spice Route",
        cuisine: "Indian",
        price_range: PriceRange::Moderate,
        description: "Biryani, tandoori, and curries across regional India.",
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        amenities: &["wifi", "wheelchair"],
    },
    SeedRestaurant {
        name: "Bangkok Street",
        cuisine: "Thai",
        price_range: PriceRange::Budget,
        description: "Pad thai, green curry, and night-market favorites.",
        dietary_options: &["vegetarian", "vegan"],
        amenities: &["wifi"],
    },
    SeedRestaurant {
        name: "Seoul Kitchen",
        cuisine: "Korean",
        price_range: PriceRange::Moderate,
        description: "Tabletop Korean BBQ with house-made banchan.",
        dietary_options: &["gluten-free"],
        amenities: &["parking", "wifi"],
    },
    SeedRestaurant {
        name: "Veggie Haven",
        cuisine: "Vegetarian",
        price_range: PriceRange::Moderate,
        description: "Creative plant-based cuisine, organic and locally sourced.",
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        amenities: &["wifi", "outdoor", "wheelchair"],
    },
    SeedRestaurant {
        name: "Seafood Shack",
        cuisine: "Seafood",
        price_range: PriceRange::Moderate,
        description: "Fresh catches daily with lobster rolls and oysters.",
        dietary_options: &["gluten-free"],
        amenities: &["outdoor", "wifi"],
    },
    SeedRestaurant {
        name: "Steakhouse Prime",
        cuisine: "Steakhouse",
        price_range: PriceRange::Luxury,
        description: "Dry-aged prime cuts in a sophisticated setting.",
        dietary_options: &["gluten-free"],
        amenities: &["parking", "wifi", "wheelchair"],
    },
    SeedRestaurant {
        name: "Pizza Napoli",
        cuisine: "Pizza",
        price_range: PriceRange::Budget,
        description: "Neapolitan pizza from a 900-degree wood-fired oven.",
        dietary_options: &["vegetarian", "vegan"],
        amenities: &["wifi", "outdoor"],
    },
    SeedRestaurant {
        name: "Sunrise Brunch",
        cuisine: "Brunch",
        price_range: PriceRange::Moderate,
        description: "All-day brunch with organic eggs and craft coffee.",
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        amenities: &["outdoor", "wifi", "wheelchair"],
    },
    SeedRestaurant {
        name: "Golden Dragon",
        cuisine: "Chinese",
        price_range: PriceRange::Moderate,
        description: "Cantonese classics and hand-pulled noodles.",
        dietary_options: &["vegetarian"],
        amenities: &["wifi", "wheelchair"],
    },
    SeedRestaurant {
        name: "Mediterraneo",
        cuisine: "Mediterranean",
        price_range: PriceRange::Upscale,
        description: "Coastal Mediterranean plates and an olive-oil bar.",
        dietary_options: &["vegetarian", "vegan", "gluten-free"],
        amenities: &["outdoor", "parking", "wifi"],
    },
];

const STREET_NAMES: &[&str] = &[
    "Main St", "Oak Avenue", "Park Blvd", "Broadway", "First St", "Second Ave",
    "Market St", "Spring St", "Cedar Rd", "Pine St", "Maple Ave", "Elm St",
    "River Rd", "Lake Ave", "Ocean Blvd", "Sunset Blvd", "Garden St", "Harbor Lane",
];

const NEIGHBORHOODS: &[&str] = &[
    "Downtown", "Midtown", "Upper East", "West Village", "SoHo", "Chelsea",
    "Brooklyn Heights", "East Village", "Tribeca", "Chinatown", "Little Italy",
    "Flatiron", "Astoria", "Williamsburg", "DUMBO",
];

const HOURS_OPTIONS: &[&str] = &[
    "Mon-Fri: 11am-10pm, Sat-Sun: 10am-11pm",
    "Daily: 11am-10pm",
    "Tue-Sun: 5pm-11pm",
    "Mon-Sat: 11:30am-10:30pm, Sun: 12pm-9pm",
    "Daily: 11:30am-10pm",
    "Wed-Mon: 12pm-9pm (Closed Tuesdays)",
    "Mon-Thu: 5pm-10pm, Fri-Sun: 12pm-11pm",
    "Daily: 10am-10pm",
];

fn address_for(index: usize) -> String {
    let number = 100 + (index * 23) % 900;
    let street = STREET_NAMES[index % STREET_NAMES.len()];
    let neighborhood = NEIGHBORHOODS[index % NEIGHBORHOODS.len()];
    format!("{} {}, {}, NY {}", number, street, neighborhood, 10000 + index % 100)
}

fn phone_for(index: usize) -> String {
    let mid = 100 + (index * 7) % 900;
    let end = 1000 + (index * 13) % 9000;
    format!("(555) {}-{}", mid, end)
}

fn gallery_for(cuisine: &str) -> Vec<String> {
    let slug = cuisine.to_lowercase().replace(' ', "-");
    (1..=3)
        .map(|n| format!("https://images.tablenow.example/{}/{}.jpg", slug, n))
        .collect()
}

/// Build the full restaurant catalog.
///
/// Ratings land in 3.5-5.0, review counts in 30-529, distances in 0.2-12.1,
/// and roughly 85% of entries are flagged available today.
pub fn restaurants() -> Vec<Restaurant> {
    SEED_RESTAURANTS
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let gallery = gallery_for(seed.cuisine);
            let rating = 3.5 + ((index * 7) % 16) as f64 / 10.0;
            let review_count = 30 + ((index * 83) % 500) as u32;
            let distance = format!("{:.1}", 0.2 + ((index * 17) % 120) as f64 / 10.0);
            let available_today = index % 7 != 5;
            Restaurant {
                id: (index + 1).to_string(),
                name: seed.name.to_string(),
                cuisine: seed.cuisine.to_string(),
                price_range: seed.price_range,
                rating,
                review_count,
                image: gallery[0].clone(),
                gallery,
                address: address_for(index),
                phone: phone_for(index),
                hours: HOURS_OPTIONS[index % HOURS_OPTIONS.len()].to_string(),
                amenities: seed.amenities.iter().map(|s| s.to_string()).collect(),
                distance,
                description: seed.description.to_string(),
                dietary_options: seed.dietary_options.iter().map(|s| s.to_string()).collect(),
                available_today,
            }
        })
        .collect()
}

/// Seed reviews for the first few restaurants
pub fn reviews() -> Vec<Review> {
    let seed: &[(&str, &str, &str, &str, u8, &str, &str, u32)] = &[
        ("r1", "1", "Sarah M.", "SM", 5, "2026-01-28", "Absolutely incredible pasta! The carbonara was the best I've ever had outside of Rome.", 12),
        ("r2", "1", "Michael R.", "MR", 4, "2026-01-25", "Great food and service. The tiramisu is a must-try!", 8),
        ("r3", "1", "Emily K.", "EK", 5, "2026-01-20", "We celebrated our anniversary here and it was perfect.", 15),
        ("r4", "2", "David L.", "DL", 5, "2026-01-30", "The omakase experience was worth every penny.", 20),
        ("r5", "2", "Jennifer W.", "JW", 4, "2026-01-22", "Fantastic sushi, some of the best in the city.", 6),
        ("r6", "3", "Carlos G.", "CG", 5, "2026-01-29", "Authentic Mexican food that reminds me of home!", 18),
        ("r7", "3", "Amanda T.", "AT", 4, "2026-01-18", "Great atmosphere and tasty food at reasonable prices.", 11),
    ];
    seed.iter()
        .map(|(id, restaurant_id, user_name, initials, rating, date, text, helpful)| Review {
            id: id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            user_name: user_name.to_string(),
            user_initials: initials.to_string(),
            rating: *rating,
            date: date.to_string(),
            text: text.to_string(),
            helpful: *helpful,
        })
        .collect()
}
