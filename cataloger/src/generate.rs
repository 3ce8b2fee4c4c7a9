use engine::{PropertyRecord, PropertyType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct CityInfo {
    city: &'static str,
    state: &'static str,
    avg_price: f64,
}

const CITIES: &[CityInfo] = &[
    CityInfo { city: "San Francisco", state: "CA", avg_price: 1_200_000.0 },
    CityInfo { city: "Los Angeles", state: "CA", avg_price: 900_000.0 },
    CityInfo { city: "New York", state: "NY", avg_price: 1_500_000.0 },
    CityInfo { city: "Austin", state: "TX", avg_price: 600_000.0 },
    CityInfo { city: "Seattle", state: "WA", avg_price: 800_000.0 },
    CityInfo { city: "Miami", state: "FL", avg_price: 700_000.0 },
    CityInfo { city: "Denver", state: "CO", avg_price: 650_000.0 },
    CityInfo { city: "Portland", state: "OR", avg_price: 550_000.0 },
    CityInfo { city: "Chicago", state: "IL", avg_price: 450_000.0 },
    CityInfo { city: "Boston", state: "MA", avg_price: 750_000.0 },
];

const LUXURY: &[&str] = &["pool", "spa", "wine cellar", "home theater", "smart home", "private elevator"];
const FAMILY: &[&str] = &["garage", "backyard", "garden", "playground", "good schools", "family room"];
const BASIC: &[&str] = &["parking", "laundry", "storage", "balcony", "patio", "deck"];
const MODERN: &[&str] = &["solar panels", "ev charging", "energy efficient", "new construction", "renovated"];

const ADJECTIVES: &[&str] = &["Modern", "Charming", "Stunning", "Beautiful", "Luxurious", "Cozy", "Spacious", "Updated"];
const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Elm St", "Park Blvd", "Beach Rd", "Mountain View Dr",
    "Sunset Blvd", "Lake Shore Dr", "Broadway", "Fifth Ave",
];

fn price_multiplier(kind: PropertyType) -> f64 {
    match kind {
        PropertyType::Penthouse => 2.5,
        PropertyType::House => 1.3,
        PropertyType::Condo => 0.9,
        PropertyType::Townhouse => 1.1,
        PropertyType::Apartment => 0.7,
    }
}

fn type_noun(kind: PropertyType) -> &'static str {
    match kind {
        PropertyType::House => "Home",
        PropertyType::Condo => "Condo",
        PropertyType::Townhouse => "Townhouse",
        PropertyType::Apartment => "Apartment",
        PropertyType::Penthouse => "Penthouse",
    }
}

fn bedroom_range(kind: PropertyType) -> std::ops::RangeInclusive<u32> {
    match kind {
        PropertyType::House => 3..=5,
        PropertyType::Condo | PropertyType::Townhouse => 1..=3,
        PropertyType::Apartment => 1..=2,
        PropertyType::Penthouse => 3..=4,
    }
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn take_prefix(rng: &mut StdRng, pool: &[&str], min: usize, max: usize, out: &mut Vec<String>) {
    let n = rng.gen_range(min..=max).min(pool.len());
    out.extend(pool[..n].iter().map(|s| s.to_string()));
}

/// Listing features depend on the price band, plus a few extras typical of the city.
fn features_for(rng: &mut StdRng, price: u64, city: &str) -> Vec<String> {
    let mut features = Vec::new();
    if price > 1_500_000 {
        take_prefix(rng, LUXURY, 2, 4, &mut features);
        take_prefix(rng, MODERN, 1, 2, &mut features);
    } else if price > 800_000 {
        take_prefix(rng, FAMILY, 1, 3, &mut features);
        take_prefix(rng, BASIC, 1, 2, &mut features);
    } else {
        take_prefix(rng, BASIC, 2, 4, &mut features);
    }

    match city {
        "Miami" | "Los Angeles" => {
            if rng.gen_bool(0.5) { features.push("pool".into()); }
            if rng.gen_bool(0.3) { features.push("ocean view".into()); }
        }
        "Denver" | "Seattle" => {
            if rng.gen_bool(0.4) { features.push("mountain view".into()); }
        }
        "New York" | "Chicago" => {
            if rng.gen_bool(0.5) { features.push("city view".into()); }
            if rng.gen_bool(0.3) { features.push("doorman".into()); }
        }
        _ => {}
    }

    let mut seen = std::collections::HashSet::new();
    features.retain(|f| seen.insert(f.clone()));
    features
}

fn listing(rng: &mut StdRng, id: u32) -> PropertyRecord {
    let info = pick(rng, CITIES);
    let kind = *pick(rng, &PropertyType::ALL[..]);

    let base = info.avg_price * price_multiplier(kind);
    let price = (base * rng.gen_range(0.5..1.5)).floor() as u64;
    let bedrooms = rng.gen_range(bedroom_range(kind));
    let bathrooms = ((bedrooms as f64 * 0.75).floor() as u32).max(1);
    let square_feet = 600 + bedrooms * 400 + rng.gen_range(0..1000);
    let features = features_for(rng, price, info.city);

    let title = format!("{} {}", pick(rng, ADJECTIVES), type_noun(kind));
    let address = format!("{} {}", rng.gen_range(1..=9999), pick(rng, STREETS));
    let highlights = if features.is_empty() {
        String::new()
    } else {
        let top: Vec<&str> = features.iter().take(3).map(String::as_str).collect();
        format!(" Features include {}.", top.join(", "))
    };
    let audience = if bedrooms <= 2 { "singles or couples" } else { "families" };
    let description = format!(
        "{title} in {}. This {kind} offers {bedrooms} bedrooms and {bathrooms} bathrooms with {square_feet} square feet of living space.{highlights} Perfect for {audience}.",
        info.city
    );

    PropertyRecord {
        id,
        title,
        address,
        city: info.city.to_string(),
        state: info.state.to_string(),
        zip_code: Some(rng.gen_range(10_000..100_000)),
        price,
        bedrooms,
        bathrooms,
        square_feet,
        kind,
        features,
        description,
        year_built: Some(rng.gen_range(1980..2024)),
        image: Some(format!("https://source.unsplash.com/800x600/?{kind},real-estate,home")),
    }
}

/// `count` listings with ids 1..=count. The same seed always yields the same catalog.
pub fn generate(count: u32, seed: u64) -> Vec<PropertyRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count).map(|id| listing(&mut rng, id)).collect()
}
