use engine::scorer::score;
use engine::similarity::string_similarity;
use engine::{PropertyRecord, PropertyType, SearchCriteria};

fn listing(price: u64, bedrooms: u32, city: &str, kind: PropertyType, features: &[&str]) -> PropertyRecord {
    PropertyRecord {
        id: 1,
        title: "Test Listing".into(),
        address: "100 Lake Shore Dr".into(),
        city: city.into(),
        state: "IL".into(),
        zip_code: Some(60601),
        price,
        bedrooms,
        bathrooms: 1,
        square_feet: 900,
        kind,
        features: features.iter().map(|s| s.to_string()).collect(),
        description: String::new(),
        year_built: None,
        image: None,
    }
}

#[test]
fn empty_criteria_scores_full() {
    let p = listing(123_456, 0, "Chicago", PropertyType::Apartment, &[]);
    assert_eq!(score(&p, &SearchCriteria::new()), 100);
}

#[test]
fn price_bounds_are_inclusive() {
    let p = listing(500_000, 2, "Chicago", PropertyType::Condo, &[]);
    assert_eq!(score(&p, &SearchCriteria::new().min_price(500_000.0)), 100);
    assert_eq!(score(&p, &SearchCriteria::new().max_price(500_000.0)), 100);
    assert_eq!(score(&p, &SearchCriteria::new().min_price(500_000.0).max_price(500_000.0)), 100);
}

#[test]
fn price_outside_bound_decays_linearly() {
    let p = listing(550_000, 2, "Chicago", PropertyType::Condo, &[]);
    // 10% over -> 27 of 30
    assert_eq!(score(&p, &SearchCriteria::new().max_price(500_000.0)), 90);
    let far = listing(2_000_000, 2, "Chicago", PropertyType::Condo, &[]);
    assert_eq!(score(&far, &SearchCriteria::new().max_price(500_000.0)), 0);
}

#[test]
fn bedroom_credit() {
    let p = listing(1, 2, "Chicago", PropertyType::Condo, &[]);
    assert_eq!(score(&p, &SearchCriteria::new().bedrooms(2)), 100);
    assert_eq!(score(&p, &SearchCriteria::new().bedrooms(1)), 100);
    // one short -> 10 of 20
    assert_eq!(score(&p, &SearchCriteria::new().bedrooms(3)), 50);
    assert_eq!(score(&p, &SearchCriteria::new().bedrooms(4)), 0);
}

#[test]
fn exact_city_beats_substring() {
    let p = listing(1, 1, "Chicago", PropertyType::Condo, &[]);
    let exact = score(&p, &SearchCriteria::new().location("chicago"));
    let partial = score(&p, &SearchCriteria::new().location("lake shore"));
    let miss = score(&p, &SearchCriteria::new().location("Boston"));
    assert_eq!(exact, 100);
    assert_eq!(partial, 60);
    assert_eq!(miss, 0);
    assert!(exact > partial);
    // state text counts as a partial match too
    assert_eq!(score(&p, &SearchCriteria::new().location("IL")), 60);
}

#[test]
fn type_is_binary() {
    let p = listing(1, 1, "Chicago", PropertyType::Townhouse, &[]);
    assert_eq!(score(&p, &SearchCriteria::new().property_type(PropertyType::Townhouse)), 100);
    assert_eq!(score(&p, &SearchCriteria::new().property_type(PropertyType::House)), 0);
}

#[test]
fn features_are_proportional_substring_matches() {
    let p = listing(1, 1, "Chicago", PropertyType::Condo, &["Rooftop Terrace", "gym"]);
    let c = SearchCriteria::new().feature("terrace").feature("pool");
    assert_eq!(score(&p, &c), 50);
    let c = SearchCriteria::new().feature("GYM").feature("rooftop");
    assert_eq!(score(&p, &c), 100);
}

#[test]
fn score_is_share_of_applicable_weight() {
    // price 30/30 + type 0/15 -> 30/45
    let p = listing(400_000, 3, "Chicago", PropertyType::House, &[]);
    let c = SearchCriteria::new().max_price(450_000.0).property_type(PropertyType::Condo);
    assert_eq!(score(&p, &c), 67);
}

#[test]
fn scores_stay_in_range() {
    let kinds = PropertyType::ALL;
    for (i, kind) in kinds.iter().enumerate() {
        let p = listing(100_000 * (i as u64 + 1), i as u32, "Chicago", *kind, &["pool", "spa"]);
        let c = SearchCriteria::new()
            .min_price(250_000.0)
            .max_price(300_000.0)
            .bedrooms(3)
            .location("Chi")
            .property_type(PropertyType::Penthouse)
            .feature("pool")
            .feature("garage");
        let s = score(&p, &c);
        assert!(s <= 100, "score {s} out of range");
    }
}

#[test]
fn similarity_identities() {
    for s in ["", "pool", "Ocean View", "ünïcode"] {
        assert_eq!(string_similarity(s, s), 1.0);
    }
    assert!(string_similarity("pool", "swimming pool") >= 0.7);
    assert!(string_similarity("garage", "carport") < 0.7);
}
