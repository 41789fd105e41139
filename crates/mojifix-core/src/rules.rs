/// One ordered substitution: the corrupt literal, its replacement, and the
/// tally key hits are reported under.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub bad: &'static str,
    pub good: &'static str,
    pub key: &'static str,
}

const fn rule(bad: &'static str, good: &'static str, key: &'static str) -> Rule {
    Rule { bad, good, key }
}

/// Mojibake repair table (cp1252 bytes re-decoded as UTF-8, singly or doubly).
///
/// Slice order is load-bearing: several entries are strict prefixes or
/// substrings of earlier ones (e.g. `C3 A2 C2` under the six-char sequences,
/// `C2` under everything that starts with it). A shorter rule applied first
/// would chew through the middle of a longer corruption and leave garbage, so
/// most-specific-first ordering must be kept exactly as declared here.
pub static MOJIBAKE_RULES: &[Rule] = &[
    // cp1252/UTF-8 single mix: U+2019, U+201C, U+201D, U+2013, U+2014, U+2011
    rule("\u{e2}\u{80}\u{99}", "'", "mojibake_\u{e2}\u{80}\u{99}"),
    rule("\u{e2}\u{80}\u{9c}", "\"", "mojibake_\u{e2}\u{80}\u{9c}"),
    rule("\u{e2}\u{80}\u{9d}", "\"", "mojibake_\u{e2}\u{80}\u{9d}"),
    rule("\u{e2}\u{80}\u{93}", "-", "mojibake_\u{e2}\u{80}\u{93}"),
    rule("\u{e2}\u{80}\u{94}", "--", "mojibake_\u{e2}\u{80}\u{94}"),
    rule("\u{e2}\u{80}\u{91}", "-", "mojibake_\u{e2}\u{80}\u{91}"),
    // Double mix: the same punctuation run through the mangle twice
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{99}", "'", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{99}"),
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{9c}", "\"", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{9c}"),
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{9d}", "\"", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{9d}"),
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{93}", "-", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{93}"),
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{94}", "--", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{94}"),
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{91}", "-", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{91}"),
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{a6}", "...", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{a6}"),
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{b9}", "-", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}\u{b9}"),
    // Truncated tails of the above
    rule("\u{c3}\u{a2}\u{c2}\u{80}\u{c2}", "-", "mojibake_\u{c3}\u{a2}\u{c2}\u{80}\u{c2}"),
    rule("\u{c3}\u{a2}\u{c2}", "-", "mojibake_\u{c3}\u{a2}\u{c2}"),
    rule("\u{20ac}\u{c2}", "-", "mojibake_\u{20ac}\u{c2}"),
    rule("\u{20ac}", "-", "mojibake_\u{20ac}"),
    rule("\u{c2}", "-", "mojibake_\u{c2}"),
    // Stray cp1252 leftovers
    rule("\u{c2}\u{ab}", "\"", "mojibake_\u{c2}\u{ab}"),
    rule("\u{c2}\u{bb}", "\"", "mojibake_\u{c2}\u{bb}"),
    rule("\u{c2}\u{b7}", "-", "mojibake_\u{c2}\u{b7}"),
    rule("\u{c2}\u{ad}", "-", "mojibake_\u{c2}\u{ad}"),
    rule("\u{c2}\u{95}", "-", "mojibake_\u{c2}\u{95}"),
    rule("\u{c2}\u{96}", "-", "mojibake_\u{c2}\u{96}"),
    rule("\u{c2}\u{97}", "--", "mojibake_\u{c2}\u{97}"),
];

/// Smart-punctuation fold: single code points to ASCII equivalents.
pub static SMART_RULES: &[Rule] = &[
    rule("\u{2018}", "'", "smart_\u{2018}"),
    rule("\u{2019}", "'", "smart_\u{2019}"),
    rule("\u{201c}", "\"", "smart_\u{201c}"),
    rule("\u{201d}", "\"", "smart_\u{201d}"),
    rule("\u{2013}", "-", "smart_\u{2013}"),
    rule("\u{2014}", "--", "smart_\u{2014}"),
    // non-breaking hyphen
    rule("\u{2011}", "-", "smart_\u{2011}"),
    rule("\u{b7}", "-", "smart_\u{b7}"),
    rule("\u{95}", "-", "smart_\u{95}"),
    rule("\u{96}", "-", "smart_\u{96}"),
    rule("\u{97}", "--", "smart_\u{97}"),
];

/// Zero-width / format code points deleted outright.
pub const ZERO_WIDTH: &[char] = &['\u{200b}', '\u{200c}', '\u{200d}', '\u{feff}'];

pub const BOM: char = '\u{feff}';
pub const NBSP: char = '\u{a0}';
pub const REPLACEMENT: char = '\u{fffd}';

pub const KEY_BOM: &str = "bom_removed";
pub const KEY_NBSP: &str = "nbsp_to_space";
pub const KEY_ZERO_WIDTH: &str = "zero_width_removed";
pub const KEY_REPLACEMENT: &str = "replacement_removed";
