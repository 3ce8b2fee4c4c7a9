use crate::normalize::normalize;

/// Synonym groups used to widen a requested feature. Order matters: the first group whose key
/// or member appears in the input wins.
const FEATURE_GROUPS: &[(&str, &[&str])] = &[
    ("pool", &["swimming pool", "spa", "hot tub", "jacuzzi"]),
    ("garage", &["parking", "carport", "covered parking"]),
    ("garden", &["yard", "backyard", "lawn", "landscaping"]),
    ("view", &["ocean view", "mountain view", "city view", "lake view", "panoramic view"]),
    ("modern", &["updated", "renovated", "new construction", "contemporary"]),
    ("luxury", &["high-end", "premium", "upscale", "exclusive"]),
    ("school", &["good schools", "school district", "education"]),
    ("family", &["family room", "family-friendly", "playground", "safe neighborhood"]),
];

/// Similarity in [0, 1]: 1.0 for equal strings, 0.8 when one contains the other, otherwise
/// one minus the edit distance over the longer length. Case-insensitive.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.8;
    }
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max_len = a_chars.len().max(b_chars.len());
    let distance = levenshtein(&a_chars, &b_chars);
    1.0 - distance as f64 / max_len as f64
}

/// Unit-cost insert/delete/substitute edit distance.
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() { return b.len(); }
    if b.is_empty() { return a.len(); }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Expands a feature into its synonym group (key first, then members). Unknown features come
/// back alone, lowercased.
pub fn related_features(feature: &str) -> Vec<String> {
    let needle = feature.to_lowercase();
    for (key, members) in FEATURE_GROUPS {
        if needle.contains(key) || members.iter().any(|m| needle.contains(m)) {
            let mut group = Vec::with_capacity(members.len() + 1);
            group.push(key.to_string());
            group.extend(members.iter().map(|m| m.to_string()));
            return group;
        }
    }
    vec![needle]
}

/// True when any of `have` is close enough (strictly above `threshold`) to any expansion of
/// `wanted`.
pub fn has_related_feature(have: &[String], wanted: &str, threshold: f64) -> bool {
    let expanded = related_features(&normalize(wanted));
    have.iter()
        .map(|pf| normalize(pf))
        .any(|pf| expanded.iter().any(|rf| string_similarity(&pf, rf) > threshold))
}
