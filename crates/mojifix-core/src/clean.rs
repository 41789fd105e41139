use crate::rules::{
    BOM, KEY_BOM, KEY_NBSP, KEY_REPLACEMENT, KEY_ZERO_WIDTH, MOJIBAKE_RULES, NBSP, REPLACEMENT,
    SMART_RULES, ZERO_WIDTH,
};
use crate::tally::Tally;

/// Run the fixed-order normalization passes over `text`.
///
/// Pure and total: no I/O, no state, cannot fail. Passes, in order:
/// 1. strip leading BOM(s), one tally hit if the text started with one
/// 2. NBSP -> space
/// 3. delete zero-width code points
/// 4. mojibake repair, table order
/// 5. smart-punctuation fold, table order
/// 6. U+FFFD -> `-`
///
/// Each pass counts occurrences in the text as modified by the passes before
/// it, then replaces all of them before the next rule runs.
pub fn clean_text(text: &str) -> (String, Tally) {
    let mut tally = Tally::new();
    let mut text = text.to_owned();

    if text.starts_with(BOM) {
        tally.add(KEY_BOM, 1);
        text = text.trim_start_matches(BOM).to_owned();
    }

    let nbsp_hits = text.matches(NBSP).count() as u64;
    if nbsp_hits > 0 {
        tally.add(KEY_NBSP, nbsp_hits);
        text = text.replace(NBSP, " ");
    }

    for &zw in ZERO_WIDTH {
        let hits = text.matches(zw).count() as u64;
        if hits > 0 {
            tally.add(KEY_ZERO_WIDTH, hits);
            text = text.replace(zw, "");
        }
    }

    for rule in MOJIBAKE_RULES {
        let hits = text.matches(rule.bad).count() as u64;
        if hits > 0 {
            tally.add(rule.key, hits);
            text = text.replace(rule.bad, rule.good);
        }
    }

    for rule in SMART_RULES {
        let hits = text.matches(rule.bad).count() as u64;
        if hits > 0 {
            tally.add(rule.key, hits);
            text = text.replace(rule.bad, rule.good);
        }
    }

    let rep_hits = text.matches(REPLACEMENT).count() as u64;
    if rep_hits > 0 {
        tally.add(KEY_REPLACEMENT, rep_hits);
        text = text.replace(REPLACEMENT, "-");
    }

    (text, tally)
}
