//! Vocalization post-processing: prefix-vowel assimilation, mark removal,
//! and Unicode normalization.
//!
//! Phrases are assembled by gluing table entries together, and the vowel
//! under a one-letter prefix (the conjunction "וְ", the preposition "לְ")
//! depends on the word it lands on. The tables always spell the prefix with
//! sheva; [`correct`] rewrites it once the neighbour is known.
//!
//! All functions here return NFC text, so callers can compare outputs
//! without worrying about the order marks were typed in.

use tracing::trace;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// HEBREW POINT SHEVA.
pub const SHEVA: char = '\u{05B0}';
/// HEBREW POINT HATAF PATAH.
pub const HATAF_PATAH: char = '\u{05B2}';
/// HEBREW POINT HIRIQ.
pub const HIRIQ: char = '\u{05B4}';
/// HEBREW POINT TSERE.
pub const TSERE: char = '\u{05B5}';
/// HEBREW POINT PATAH.
pub const PATAH: char = '\u{05B7}';
/// HEBREW POINT QAMATS.
pub const QAMATS: char = '\u{05B8}';
/// HEBREW POINT DAGESH OR MAPIQ; on a vav it reads as shuruk.
pub const DAGESH: char = '\u{05BC}';

/// Conjunction "and".
const VAV: char = 'ו';
/// Preposition "to".
const LAMED: char = 'ל';
/// Letters that cannot take a plain sheva and pull the prefix vowel.
const GUTTURALS: [char; 4] = ['א', 'ה', 'ח', 'ע'];

/// What the word after the prefix has to start with for a rule to fire.
#[derive(Debug, Clone, Copy)]
enum Onset {
    /// A guttural carrying the given vowel.
    Guttural(char),
    /// Any consonant carrying sheva.
    Sheva,
}

impl Onset {
    fn matches(self, base: char, marks: &str) -> bool {
        match self {
            Self::Guttural(vowel) => GUTTURALS.contains(&base) && marks.contains(vowel),
            Self::Sheva => marks.contains(SHEVA),
        }
    }
}

/// One prefix-vowel rewrite: `prefix` + sheva becomes `prefix` + `vowel`
/// when the next letter matches `onset`.
#[derive(Debug, Clone, Copy)]
struct Assimilation {
    name: &'static str,
    prefix: char,
    onset: Onset,
    vowel: char,
}

/// Checked top to bottom; the first match wins.
const ASSIMILATIONS: [Assimilation; 5] = [
    // וַחֲמִישָּׁה
    Assimilation {
        name: "and_before_hataf",
        prefix: VAV,
        onset: Onset::Guttural(HATAF_PATAH),
        vowel: PATAH,
    },
    // לַחֲצוֹת
    Assimilation {
        name: "to_before_hataf",
        prefix: LAMED,
        onset: Onset::Guttural(HATAF_PATAH),
        vowel: PATAH,
    },
    // וָחֵצִי
    Assimilation {
        name: "and_before_tsere",
        prefix: VAV,
        onset: Onset::Guttural(TSERE),
        vowel: QAMATS,
    },
    // וּשְׁמוֹנֶה
    Assimilation {
        name: "and_before_sheva",
        prefix: VAV,
        onset: Onset::Sheva,
        vowel: DAGESH,
    },
    // לִשְׁמוֹנֶה
    Assimilation {
        name: "to_before_sheva",
        prefix: LAMED,
        onset: Onset::Sheva,
        vowel: HIRIQ,
    },
];

/// Compose `text` into NFC.
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Remove every combining mark, leaving the bare consonantal text (NFC).
pub fn strip(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Split `text` into clusters: a base character followed by the combining
/// marks attached to it. Marks at the very start, with no base before
/// them, form a cluster of their own.
pub fn clusters(text: &str) -> Vec<&str> {
    let mut bounds: Vec<usize> = text
        .char_indices()
        .filter(|&(idx, c)| idx > 0 && !is_combining_mark(c))
        .map(|(idx, _)| idx)
        .collect();
    bounds.push(text.len());

    let mut start = 0;
    bounds
        .into_iter()
        .filter_map(|end| {
            let cluster = text.get(start..end);
            start = end;
            cluster.filter(|c| !c.is_empty())
        })
        .collect()
}

/// Fix the vowel of word-initial "וְ" and "לְ" to agree with the following
/// letter. The result is NFC.
pub fn correct(text: &str) -> String {
    let normalized = normalize(text);
    let parts = clusters(&normalized);
    let mut out = String::with_capacity(normalized.len());
    let mut word_start = true;

    for (idx, cluster) in parts.iter().enumerate() {
        let next = idx.checked_add(1).and_then(|n| parts.get(n));
        let rule = if word_start {
            next.and_then(|next| assimilate(cluster, next))
        } else {
            None
        };
        match rule {
            Some(rule) => {
                trace!(rule = rule.name, "assimilated prefix vowel");
                out.push(rule.prefix);
                out.push(rule.vowel);
            }
            None => out.push_str(cluster),
        }
        word_start = cluster.chars().next().is_some_and(char::is_whitespace);
    }

    normalize(&out)
}

/// Find the rule that applies to a sheva-pointed prefix `cluster` followed
/// by `next`.
fn assimilate(cluster: &str, next: &str) -> Option<&'static Assimilation> {
    let mut chars = cluster.chars();
    let prefix = chars.next()?;
    if chars.next() != Some(SHEVA) || chars.next().is_some() {
        return None;
    }
    let mut next_chars = next.chars();
    let onset = next_chars.next()?;
    let marks = next_chars.as_str();
    ASSIMILATIONS
        .iter()
        .find(|rule| rule.prefix == prefix && rule.onset.matches(onset, marks))
}
