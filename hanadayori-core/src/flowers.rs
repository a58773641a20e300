//! Flower vocabulary used to steer photo searches.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// Query used for the initial, unfiltered feed.
pub const DEFAULT_QUERY: &str = "flowers";

/// Terms drawn from when diversifying a "load more" feed.
pub const VARIETY_TERMS: [&str; 6] = [
    "roses",
    "tulips",
    "sunflower",
    "lily flowers",
    "cherry blossom",
    "floral arrangement",
];

/// A selectable flower kind: English search term plus Japanese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FlowerKind {
    pub term: &'static str,
    pub label: &'static str,
}

impl FlowerKind {
    pub const fn new(term: &'static str, label: &'static str) -> Self {
        Self { term, label }
    }

    /// Search text for this kind, e.g. `"rose flowers"`.
    pub fn query(&self) -> String {
        format!("{} {DEFAULT_QUERY}", self.term)
    }
}

pub const FLOWER_KINDS: [FlowerKind; 24] = [
    FlowerKind::new("rose", "バラ"),
    FlowerKind::new("tulip", "チューリップ"),
    FlowerKind::new("sunflower", "ひまわり"),
    FlowerKind::new("lily", "ユリ"),
    FlowerKind::new("cherry blossom", "桜"),
    FlowerKind::new("hydrangea", "アジサイ"),
    FlowerKind::new("daisy", "デイジー"),
    FlowerKind::new("orchid", "ラン"),
    FlowerKind::new("peony", "ボタン"),
    FlowerKind::new("lavender", "ラベンダー"),
    FlowerKind::new("hibiscus", "ハイビスカス"),
    FlowerKind::new("lotus", "蓮"),
    FlowerKind::new("carnation", "カーネーション"),
    FlowerKind::new("dahlia", "ダリア"),
    FlowerKind::new("iris", "アイリス"),
    FlowerKind::new("jasmine", "ジャスミン"),
    FlowerKind::new("magnolia", "モクレン"),
    FlowerKind::new("poppy", "ポピー"),
    FlowerKind::new("wisteria", "藤"),
    FlowerKind::new("azalea", "ツツジ"),
    FlowerKind::new("camellia", "椿"),
    FlowerKind::new("cosmos", "コスモス"),
    FlowerKind::new("gardenia", "クチナシ"),
    FlowerKind::new("marigold", "マリーゴールド"),
];

/// Look up a catalog entry by its English term.
pub fn find_kind(term: &str) -> Option<&'static FlowerKind> {
    let term = term.trim();
    FLOWER_KINDS
        .iter()
        .find(|kind| kind.term.eq_ignore_ascii_case(term))
}

/// Uniform draw from [`VARIETY_TERMS`].
pub fn pick_variety_term<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    VARIETY_TERMS.choose(rng).copied().unwrap_or(DEFAULT_QUERY)
}
