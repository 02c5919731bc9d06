//! Deck statistics integration tests.
//!
//! These tests run the full pipeline: bulk text to entries, metadata
//! through a cache, and every aggregation on top.

use proptest::prelude::*;
use rust_deckbox::core::{CacheConfig, CardMetadata, ColorSet, TypeLine};
use rust_deckbox::metadata::{parse_named_response, MetadataCache, MetadataLookup};
use rust_deckbox::parser::parse;
use rust_deckbox::stats::{
    average_mana_value, color_distribution, mana_curve, type_distribution, AverageManaValue,
    CurveBucket, DeckStats,
};
use rust_deckbox::{CardEntry, Category, ColorKey};

fn card(name: &str, type_line: &str, cost: f64, colors: &[&str]) -> CardMetadata {
    CardMetadata::new(name, TypeLine::parse(type_line), cost)
        .with_colors(ColorSet::from_symbols(colors.iter().copied()))
}

fn library() -> Vec<CardMetadata> {
    vec![
        card("Sol Ring", "Artifact", 1.0, &[]),
        card("Forest", "Basic Land — Forest", 0.0, &[]),
        card("Llanowar Elves", "Creature — Elf Druid", 1.0, &["G"]),
        card("Solemn Simulacrum", "Artifact Creature — Golem", 4.0, &[]),
        card("Kolaghan's Command", "Instant", 3.0, &["B", "R"]),
        card("Ulamog, the Ceaseless Hunger", "Legendary Creature — Eldrazi", 10.0, &[]),
        card("Dryad Arbor", "Land Creature — Forest Dryad", 0.0, &["G"]),
        card("Bitterblossom", "Kindred Enchantment — Faerie", 2.0, &["B"]),
    ]
}

fn warm_cache() -> MetadataCache {
    let mut cache = MetadataCache::new(CacheConfig::default());
    for meta in library() {
        cache.insert(meta);
    }
    cache
}

const DECK: &str = "\
1x Sol Ring
30 Forest
4 Llanowar Elves
1 Solemn Simulacrum
2x Kolaghan's Command
1 Ulamog, the Ceaseless Hunger
1 Dryad Arbor
1 Bitterblossom
";

// =============================================================================
// Full Pipeline
// =============================================================================

/// Test the mana curve over a parsed deck.
#[test]
fn test_curve_from_text() {
    let entries = parse(DECK);
    let curve = mana_curve(&entries, &warm_cache());

    assert_eq!(curve.count(CurveBucket::Cost(0)), 31);
    assert_eq!(curve.count(CurveBucket::Cost(1)), 5);
    assert_eq!(curve.count(CurveBucket::Cost(2)), 1);
    assert_eq!(curve.count(CurveBucket::Cost(3)), 2);
    assert_eq!(curve.count(CurveBucket::Cost(4)), 1);
    assert_eq!(curve.count(CurveBucket::SevenPlus), 1);
    assert_eq!(curve.total(), 41);
}

/// Test the average skips both lands, including the land creature.
#[test]
fn test_average_from_text() {
    let entries = parse(DECK);
    // Non-lands: 1 + 4*1 + 4 + 2*3 + 10 + 2 = 27 over 10 cards.
    assert_eq!(
        average_mana_value(&entries, &warm_cache()),
        AverageManaValue::Value(2.7)
    );
}

/// Test each card lands in exactly one color bucket.
#[test]
fn test_colors_from_text() {
    let entries = parse(DECK);
    let colors = color_distribution(&entries, &warm_cache());

    let get = |key: ColorKey| colors.iter().find(|c| c.color == key).map_or(0, |c| c.count);
    assert_eq!(get(ColorKey::Colorless), 33);
    assert_eq!(get(ColorKey::Green), 5);
    assert_eq!(get(ColorKey::Black), 1);
    assert_eq!(get(ColorKey::Multi), 2);
    assert_eq!(get(ColorKey::Red), 0);

    let sum: u64 = colors.iter().map(|c| c.count).sum();
    assert_eq!(sum, 41);
}

/// Test overlapping categories are each counted in full.
#[test]
fn test_types_from_text() {
    let entries = parse(DECK);
    let types = type_distribution(&entries, &warm_cache());

    let get = |category: Category| {
        types
            .iter()
            .find(|t| t.category == category)
            .map_or(0, |t| t.count)
    };
    assert_eq!(get(Category::Creature), 7);
    assert_eq!(get(Category::Artifact), 2);
    assert_eq!(get(Category::Land), 31);
    assert_eq!(get(Category::Instant), 2);
    assert_eq!(get(Category::Kindred), 1);
    assert_eq!(get(Category::Enchantment), 1);
    assert_eq!(get(Category::Sorcery), 0);

    let sum: u64 = types.iter().map(|t| t.count).sum();
    assert!(sum > 41);
}

/// Test stats recompute correctly as the cache fills in.
#[test]
fn test_recompute_as_metadata_arrives() {
    let entries = parse("4 Opt\n16 Island");
    let mut cache = MetadataCache::new(CacheConfig::default());

    let cold = DeckStats::compute(&entries, &cache);
    assert_eq!(cold.resolved_cards, 0);
    assert_eq!(cold.curve.count(CurveBucket::Cost(0)), 20);
    assert!(cold.colors.is_empty());

    let opt = r#"{"object":"card","name":"Opt","type_line":"Instant","cmc":1.0,"colors":["U"]}"#;
    let island = r#"{"object":"card","name":"Island","type_line":"Basic Land — Island","cmc":0.0,"colors":[]}"#;
    for body in [opt, island] {
        let meta = parse_named_response(body).unwrap().unwrap();
        cache.insert(meta);
    }

    let warm = DeckStats::compute(&entries, &cache);
    assert!(warm.is_complete());
    assert_eq!(warm.average, AverageManaValue::Value(1.0));
    assert_eq!(warm.curve.count(CurveBucket::Cost(1)), 4);
    assert!(cache.knows("Island"));
}

/// Test a lands-only deck reports the sentinel.
#[test]
fn test_lands_only_sentinel() {
    let entries = parse("40 Forest");
    let stats = DeckStats::compute(&entries, &warm_cache());
    assert_eq!(stats.average, AverageManaValue::NoSpells);
    assert_eq!(stats.average.to_string(), "N/A");
}

// =============================================================================
// Properties
// =============================================================================

fn deck_strategy() -> impl Strategy<Value = Vec<CardEntry>> {
    let names: Vec<String> = library().into_iter().map(|m| m.name).collect();
    prop::collection::vec(
        (prop::sample::select(names), 0u32..20).prop_map(|(n, q)| CardEntry::new(n, q)),
        0..30,
    )
}

proptest! {
    /// With full metadata, curve and color buckets both sum to the deck size.
    #[test]
    fn prop_buckets_sum_to_total(entries in deck_strategy()) {
        let cache = warm_cache();
        let total: u64 = entries.iter().map(|e| u64::from(e.quantity)).sum();

        prop_assert_eq!(mana_curve(&entries, &cache).total(), total);
        let colors: u64 = color_distribution(&entries, &cache).iter().map(|c| c.count).sum();
        prop_assert_eq!(colors, total);
    }

    /// Type totals are never below the deck size when every card has a type.
    #[test]
    fn prop_types_cover_deck(entries in deck_strategy()) {
        let cache = warm_cache();
        let total: u64 = entries.iter().map(|e| u64::from(e.quantity)).sum();
        let types: u64 = type_distribution(&entries, &cache).iter().map(|t| t.count).sum();
        prop_assert!(types >= total);
    }

    /// Aggregation is a pure function of its inputs.
    #[test]
    fn prop_stats_idempotent(entries in deck_strategy()) {
        let cache = warm_cache();
        prop_assert_eq!(DeckStats::compute(&entries, &cache), DeckStats::compute(&entries, &cache));
    }

    /// The average, when defined, lies between the cheapest and priciest spell.
    #[test]
    fn prop_average_bounded(entries in deck_strategy()) {
        if let AverageManaValue::Value(avg) = average_mana_value(&entries, &warm_cache()) {
            prop_assert!((0.0..=10.0).contains(&avg));
        }
    }
}
