//! Slug generation and the legacy slug-to-name reverse mapping.
//!
//! Product URLs use a hyphenated, lowercased form of the product name
//! (`"iPhone 12 Pro"` -> `"iphone-12-pro"`). New products store the slug at
//! creation time and are looked up by it directly. Documents that predate
//! the stored field are still reachable through [`deslugify`], which
//! reconstructs a display name word by word: each word is capitalized,
//! except for brand names with their own casing.
//!
//! The reverse mapping is lossy. A name whose words are neither in the
//! brand table nor simply word-capitalized (`"iPad mini"`, `"Mi 11X"`)
//! cannot be reconstructed, which is exactly why the stored slug exists.

/// Brands whose casing differs from plain word capitalization.
const BRAND_NAMES: &[(&str, &str)] = &[
    ("iphone", "iPhone"),
    ("samsung", "Samsung"),
    ("google", "Google"),
    ("oneplus", "OnePlus"),
];

/// Generate a URL slug from a product name.
///
/// Lowercases, maps runs of whitespace and hyphens to a single hyphen, and
/// drops any other non-alphanumeric characters.
///
/// ```
/// use phone_dokan_core::slug::slugify;
///
/// assert_eq!(slugify("iPhone 12 Pro"), "iphone-12-pro");
/// assert_eq!(slugify("Galaxy S24  Ultra"), "galaxy-s24-ultra");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
        // other punctuation is dropped
    }

    slug
}

/// Reconstruct a display name from a slug.
///
/// Hyphens become spaces; each word gets its first letter capitalized,
/// unless the whole word matches the brand table, which wins.
///
/// ```
/// use phone_dokan_core::slug::deslugify;
///
/// assert_eq!(deslugify("iphone-12-pro"), "iPhone 12 Pro");
/// assert_eq!(deslugify("pixel-8a"), "Pixel 8a");
/// ```
#[must_use]
pub fn deslugify(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, brand)) = BRAND_NAMES.iter().find(|(key, _)| *key == lower) {
        return (*brand).to_owned();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("iPhone 12 Pro"), "iphone-12-pro");
        assert_eq!(slugify("Samsung Galaxy S24"), "samsung-galaxy-s24");
        assert_eq!(slugify("  OnePlus  12R  "), "oneplus-12r");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Google Pixel 8 (Pro)"), "google-pixel-8-pro");
    }

    #[test]
    fn deslugify_uses_brand_table() {
        assert_eq!(deslugify("iphone-12-pro"), "iPhone 12 Pro");
        assert_eq!(deslugify("oneplus-12"), "OnePlus 12");
        assert_eq!(deslugify("samsung-galaxy-s24"), "Samsung Galaxy S24");
    }

    #[test]
    fn deslugify_capitalizes_unknown_words() {
        assert_eq!(deslugify("galaxy-tab"), "Galaxy Tab");
        assert_eq!(deslugify("12"), "12");
    }

    // For names made of letters/digits/spaces whose words are brand-table
    // hits or already word-capitalized, the reverse mapping is exact.
    #[test]
    fn round_trip_holds_for_brand_table_names() {
        for name in ["iPhone 12 Pro", "Samsung Galaxy S24", "OnePlus 12", "Google Pixel 8"] {
            assert_eq!(deslugify(&slugify(name)), name);
        }
    }

    // Outside the table only per-word capitalization is guaranteed, not the
    // original casing.
    #[test]
    fn round_trip_is_lossy_outside_the_table() {
        assert_eq!(deslugify(&slugify("XIAOMI Redmi")), "Xiaomi Redmi");
    }
}
