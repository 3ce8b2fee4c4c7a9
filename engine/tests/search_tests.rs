use engine::search::{MAX_RESULTS, RELEVANCE_FLOOR};
use engine::{search, Catalog, PropertyRecord, PropertyType, SearchCriteria, SearchEngine};

fn listing(id: u32, price: u64, bedrooms: u32, city: &str, kind: PropertyType, features: &[&str]) -> PropertyRecord {
    PropertyRecord {
        id,
        title: format!("Listing {id}"),
        address: format!("{id} Main St"),
        city: city.into(),
        state: "TX".into(),
        zip_code: None,
        price,
        bedrooms,
        bathrooms: 1,
        square_feet: 1000,
        kind,
        features: features.iter().map(|s| s.to_string()).collect(),
        description: String::new(),
        year_built: None,
        image: None,
    }
}

fn mixed_catalog() -> Vec<PropertyRecord> {
    let cities = ["Austin", "Miami", "Denver", "Boston"];
    let features: [&[&str]; 4] = [&["pool", "parking"], &["garden", "deck"], &["gym"], &["hot tub", "city view"]];
    (1..=40u32)
        .map(|i| {
            let kind = PropertyType::ALL[i as usize % PropertyType::ALL.len()];
            listing(i, 200_000 + 25_000 * i as u64, i % 5, cities[i as usize % 4], kind, features[i as usize % 4])
        })
        .collect()
}

#[test]
fn perfect_match_end_to_end() {
    let catalog = vec![listing(1, 500_000, 2, "Austin", PropertyType::Condo, &["pool"])];
    let c = SearchCriteria::new()
        .max_price(600_000.0)
        .bedrooms(2)
        .location("Austin")
        .property_type(PropertyType::Condo)
        .feature("pool");
    let results = search(&catalog, &c);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), 1);
    assert_eq!(results[0].match_score, 100);
}

#[test]
fn empty_catalog_gives_empty_results() {
    assert!(search(&[], &SearchCriteria::new()).is_empty());
    assert!(search(&[], &SearchCriteria::new().location("Austin").feature("pool")).is_empty());
}

#[test]
fn hard_price_filter_runs_before_scoring() {
    let c = SearchCriteria::new().min_price(900_000_000.0).max_price(1_000_000_000.0);
    assert!(search(&mixed_catalog(), &c).is_empty());
}

#[test]
fn empty_criteria_returns_first_ten_in_catalog_order() {
    let catalog = mixed_catalog();
    let results = search(&catalog, &SearchCriteria::new());
    assert_eq!(results.len(), MAX_RESULTS);
    let ids: Vec<u32> = results.iter().map(|r| r.id()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    assert!(results.iter().all(|r| r.match_score == 100));
}

#[test]
fn results_are_bounded_ordered_and_above_floor() {
    let catalog = mixed_catalog();
    let queries = [
        SearchCriteria::new().location("Miami").bedrooms(3),
        SearchCriteria::new().max_price(600_000.0).feature("pool").feature("garage"),
        SearchCriteria::new().property_type(PropertyType::House).feature("view"),
        SearchCriteria::new().min_price(400_000.0).location("tx").feature("gym"),
    ];
    for c in &queries {
        let results = search(&catalog, c);
        assert!(results.len() <= MAX_RESULTS);
        assert!(results.iter().all(|r| r.match_score > RELEVANCE_FLOOR && r.match_score <= 100));
        assert!(results.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }
}

#[test]
fn fuzzy_bonus_lifts_synonym_matches() {
    // neither listing contains "pool" literally; the hot tub one earns the bonus
    let catalog = vec![
        listing(1, 300_000, 2, "Austin", PropertyType::Condo, &["laundry"]),
        listing(2, 300_000, 2, "Boston", PropertyType::Condo, &["hot tub"]),
    ];
    let c = SearchCriteria::new().location("Austin").property_type(PropertyType::Condo).feature("pool");
    let results = search(&catalog, &c);
    // base: 1 -> 40/50 = 80, 2 -> 15/50 = 30 (+5 bonus = 35)
    assert_eq!(results.len(), 2);
    assert_eq!((results[0].id(), results[0].match_score), (1, 80));
    assert_eq!((results[1].id(), results[1].match_score), (2, 35));
}

#[test]
fn floor_is_exclusive() {
    // type miss + city miss -> 0; exact 30 must be dropped too
    let catalog = vec![
        listing(1, 300_000, 2, "Boston", PropertyType::House, &[]),
        listing(2, 300_000, 2, "Boston", PropertyType::Condo, &[]),
    ];
    let c = SearchCriteria::new().location("Austin").property_type(PropertyType::Condo).feature("pool");
    // 2 -> 15/50 = 30, no bonus available
    assert!(search(&catalog, &c).is_empty());
}

#[test]
fn bonus_never_exceeds_hundred_and_ties_keep_catalog_order() {
    let catalog = vec![
        // base 95 (garage missing literally), bonus +10 -> capped at 100
        listing(7, 300_000, 2, "Austin", PropertyType::Condo, &["pool", "parking"]),
        // base 100, bonus +10 -> capped at 100
        listing(3, 310_000, 2, "Austin", PropertyType::Condo, &["pool", "garage"]),
    ];
    let c = SearchCriteria::new()
        .max_price(400_000.0)
        .bedrooms(2)
        .location("Austin")
        .property_type(PropertyType::Condo)
        .feature("pool")
        .feature("garage");
    let results = search(&catalog, &c);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.match_score == 100));
    assert_eq!(results[0].id(), 7);
    assert_eq!(results[1].id(), 3);
}

#[test]
fn engine_wraps_catalog_lookups() {
    let engine = SearchEngine::new(Catalog::new(mixed_catalog()).unwrap());
    assert_eq!(engine.get_all().len(), 40);
    assert_eq!(engine.get_by_id(12).map(|p| p.id), Some(12));
    assert!(engine.get_by_id(400).is_none());
    assert_eq!(engine.index().ids_in_city("austin").len(), 10);
    let results = engine.search(&SearchCriteria::new().location("Denver"));
    assert!(results.iter().all(|r| r.property.city == "Denver"));
}
