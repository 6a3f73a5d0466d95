//! Name normalization and variant generation.
//!
//! The canonical key is the sole basis for identity: two records merge
//! exactly when their names normalize to the same key. Normalization is
//! pure, deterministic, and idempotent, and never mutates the display name
//! shown to consumers.

use std::sync::OnceLock;

use regex::Regex;

/// Legal-entity suffixes stripped when they appear as a trailing token.
///
/// Matched after case folding and period/comma removal, so "K.K." and "kk"
/// both hit the `kk` entry. The list is closed; extending it changes merge
/// behavior and therefore graph identity.
const LEGAL_SUFFIXES: &[&str] = &[
    "inc",
    "incorporated",
    "ltd",
    "limited",
    "llc",
    "llp",
    "plc",
    "corp",
    "corporation",
    "co",
    "company",
    "kk",
    "gk",
    "gmbh",
    "ag",
    "sa",
    "srl",
    "bv",
    "nv",
    "株式会社",
    "有限会社",
    "合同会社",
];

fn paren_group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]*)\)").unwrap_or_else(|_| unreachable!()))
}

/// Derives the canonical key used for identity comparison.
///
/// Algorithm: drop formatting punctuation (periods and commas, hyphens are
/// meaningful and kept), case-fold, collapse whitespace, then repeatedly
/// strip a trailing legal-suffix token while more than one token remains.
/// A name consisting solely of a suffix keeps that token so the key stays
/// non-empty.
///
/// The function is idempotent: `canonical_key(canonical_key(x)) ==
/// canonical_key(x)`, and independent of source and entity kind.
///
/// # Examples
///
/// ```
/// use transparency_graph::normalize::canonical_key;
///
/// assert_eq!(canonical_key("Acme Inc."), "acme");
/// assert_eq!(canonical_key("  ACME   inc  "), "acme");
/// assert_eq!(canonical_key("Smith-Jones Holdings Ltd"), "smith-jones holdings");
/// ```
#[must_use]
pub fn canonical_key(name: &str) -> String {
    let folded: String = name
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect::<String>()
        .to_lowercase();

    let mut tokens: Vec<&str> = folded.split_whitespace().collect();
    while tokens.len() > 1 {
        match tokens.last() {
            Some(last) if LEGAL_SUFFIXES.contains(last) => {
                tokens.pop();
            }
            _ => break,
        }
    }

    tokens.join(" ")
}

/// Returns true if a name normalizes to an empty key.
///
/// Such records carry no identity and are dropped by the resolver.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    canonical_key(name).is_empty()
}

/// Generates deterministic spelling variants of a name.
///
/// Used to annotate the analysis output with the alternate forms a
/// downstream search might try: case variants, initials, single-token
/// forms, joined/underscore/hyphen forms, "Last, First" swaps, and
/// parenthetical-stripped forms. Returned sorted and deduplicated.
///
/// # Examples
///
/// ```
/// use transparency_graph::normalize::name_variants;
///
/// let variants = name_variants("John Smith");
/// assert!(variants.contains(&"JOHN SMITH".to_string()));
/// assert!(variants.contains(&"JS".to_string()));
/// assert!(variants.contains(&"John_Smith".to_string()));
/// ```
#[must_use]
pub fn name_variants(name: &str) -> Vec<String> {
    let mut variants = vec![
        name.to_string(),
        name.to_uppercase(),
        name.to_lowercase(),
        title_case(name),
        capitalize(name),
    ];

    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() > 1 {
        let initials: String = parts
            .iter()
            .filter_map(|p| p.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if !initials.is_empty() {
            variants.push(initials);
        }
        variants.push((*parts.first().unwrap_or(&"")).to_string());
        variants.push((*parts.last().unwrap_or(&"")).to_string());
        variants.push(parts.concat());
        variants.push(parts.join("_"));
        variants.push(parts.join("-"));
    }

    // "Last, First" → "First Last" (and the re-swapped comma form).
    if name.contains(',') {
        let comma_parts: Vec<&str> = name.split(',').map(str::trim).collect();
        if comma_parts.len() >= 2 && !comma_parts[0].is_empty() && !comma_parts[1].is_empty() {
            variants.push(format!("{} {}", comma_parts[1], comma_parts[0]));
            variants.push(format!("{}, {}", comma_parts[1], comma_parts[0]));
        }
    }

    let without_parens = paren_group_re().replace_all(name, "").trim().to_string();
    if without_parens != name && !without_parens.is_empty() {
        variants.push(without_parens);
        for capture in paren_group_re().captures_iter(name) {
            let inner = capture[1].trim();
            if !inner.is_empty() {
                variants.push(inner.to_string());
            }
        }
    }

    variants.retain(|v| !v.is_empty());
    variants.sort();
    variants.dedup();
    variants
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
