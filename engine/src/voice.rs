//! Spoken renderings of search results and single listings.

use crate::model::{PropertyRecord, ScoredProperty};

pub const NO_RESULTS: &str = "I couldn't find any properties matching your criteria. Would you like to adjust your search parameters? You could try expanding your price range or looking in nearby areas.";
pub const NOT_FOUND: &str = "I couldn't find that property. Could you provide more details?";

const SPOKEN_RESULTS: usize = 3;

/// Summary of a ranked result list: a count, the top three, then a follow-up question.
pub fn format_results(results: &[ScoredProperty]) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }
    let count = results.len();
    let noun = if count == 1 { "property" } else { "properties" };
    let mut out = format!("Great news! I found {count} {noun} that match what you're looking for. ");
    out.push_str("Let me tell you about the best matches: ");

    for (i, hit) in results.iter().take(SPOKEN_RESULTS).enumerate() {
        let p = &hit.property;
        out.push_str(&format!("{}. ", i + 1));
        if hit.match_score > 0 {
            out.push_str(&format!("With a {}% match score - ", hit.match_score));
        }
        out.push_str(&format!(
            "A {} {} in {} for {}. ",
            bedroom_phrase(p.bedrooms, false),
            p.kind,
            p.city,
            format_usd(p.price)
        ));
        if !p.features.is_empty() {
            let top: Vec<&str> = p.features.iter().take(2).map(String::as_str).collect();
            out.push_str(&format!("It features {}. ", top.join(" and ")));
        }
    }

    if count > SPOKEN_RESULTS {
        out.push_str(&format!(
            "I have {} more excellent options. Would you like to hear about them or would you prefer to refine your search?",
            count - SPOKEN_RESULTS
        ));
    } else {
        out.push_str("Would you like more details about any of these properties?");
    }
    out
}

/// One listing read out in full.
pub fn format_single(property: &PropertyRecord) -> String {
    let mut out = format!(
        "{} at {} in {}. It's a {} {} priced at {}, with {} square feet.",
        property.title,
        property.address,
        property.city,
        bedroom_phrase(property.bedrooms, true),
        property.kind,
        format_usd(property.price),
        property.square_feet,
    );
    if !property.features.is_empty() {
        out.push_str(&format!(" Features include {}.", property.features.join(", ")));
    }
    out
}

/// "studio", "1 bedroom", then "3 bedroom" as an adjective or "3 bedrooms" as a noun.
fn bedroom_phrase(bedrooms: u32, plural: bool) -> String {
    match bedrooms {
        0 => "studio".to_string(),
        1 => "1 bedroom".to_string(),
        n if plural => format!("{n} bedrooms"),
        n => format!("{n} bedroom"),
    }
}

/// Whole US dollars: `$1,250,000`.
pub fn format_usd(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
