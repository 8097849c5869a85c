//! Hebrew number words and fixed phrases, in plain and vocalized script.
//!
//! Two immutable tables, [`PLAIN`] and [`VOCALIZED`], hold the same entries
//! in the same order. Vocalized entries keep the full (vowel-letter)
//! spelling of their plain counterparts, so stripping the marks off any
//! vocalized entry yields the plain entry exactly.
//!
//! Gender follows colloquial usage: hours are counted with feminine
//! numerals ("שלוש", "אחת עשרה"), round minute counts with masculine ones
//! ("חמישה", "עשרה"), and other minute counts with feminine numerals
//! followed by "דקות".

use serde::Serialize;

use crate::clock::DayPeriod;

/// Whether output carries nikud (vocalization marks).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocalization {
    /// Bare consonantal text.
    Plain,
    /// Fully vocalized text.
    #[default]
    Full,
}

impl From<bool> for Vocalization {
    fn from(vocalized: bool) -> Self {
        if vocalized { Self::Full } else { Self::Plain }
    }
}

impl Vocalization {
    /// The table to phrase with.
    pub const fn lexicon(self) -> &'static Lexicon {
        match self {
            Self::Plain => &PLAIN,
            Self::Full => &VOCALIZED,
        }
    }
}

/// One script's worth of words and phrases.
#[derive(Debug)]
pub struct Lexicon {
    /// Feminine numerals for 1 through 12, which are also the hour names.
    hours: [&'static str; 12],
    /// Unit forms used in front of [`Self::teen`] for 1 through 9.
    teen_units: [&'static str; 9],
    /// Tens words for 20, 30, 40 and 50.
    tens: [&'static str; 4],
    /// "N to" phrases keyed by minutes remaining. Each ends with the fused
    /// preposition and is joined to the hour name without a space.
    relative: [(u8, &'static str); 8],
    /// Masculine five, as in "and five".
    five: &'static str,
    /// Masculine ten.
    ten: &'static str,
    /// Singular "one minute".
    one_minute: &'static str,
    /// Dual "two minutes".
    two_minutes: &'static str,
    /// Plural unit word appended to single-word counts.
    minutes: &'static str,
    /// The conjunction prefix, fused onto the following word.
    and: &'static str,
    /// The word that turns a unit into a teen.
    teen: &'static str,
    /// "and a quarter".
    quarter: &'static str,
    /// "and a half".
    half: &'static str,
    /// "midnight", used in place of the hour name.
    midnight: &'static str,
    /// Suffixes in [`DayPeriod::ALL`] order.
    day_periods: [&'static str; 5],
}

/// Unvocalized table.
pub static PLAIN: Lexicon = Lexicon {
    hours: [
        "אחת",
        "שתיים",
        "שלוש",
        "ארבע",
        "חמש",
        "שש",
        "שבע",
        "שמונה",
        "תשע",
        "עשר",
        "אחת עשרה",
        "שתים עשרה",
    ],
    teen_units: [
        "אחת", "שתים", "שלוש", "ארבע", "חמש", "שש", "שבע", "שמונה", "תשע",
    ],
    tens: ["עשרים", "שלושים", "ארבעים", "חמישים"],
    relative: [
        (20, "עשרים ל"),
        (15, "רבע ל"),
        (10, "עשרה ל"),
        (5, "חמישה ל"),
        (4, "ארבע דקות ל"),
        (3, "שלוש דקות ל"),
        (2, "שתי דקות ל"),
        (1, "דקה ל"),
    ],
    five: "חמישה",
    ten: "עשרה",
    one_minute: "דקה אחת",
    two_minutes: "שתי דקות",
    minutes: "דקות",
    and: "ו",
    teen: "עשרה",
    quarter: "ורבע",
    half: "וחצי",
    midnight: "חצות",
    day_periods: ["בבוקר", "בצהריים", "אחר הצהריים", "בערב", "בלילה"],
};

/// Vocalized table. Mark order inside each entry is not significant; the
/// composer normalizes to NFC before correcting.
pub static VOCALIZED: Lexicon = Lexicon {
    hours: [
        "אַחַת",
        "שְׁתַּיִים",
        "שָׁלוֹשׁ",
        "אַרְבַּע",
        "חָמֵשׁ",
        "שֵׁשׁ",
        "שֶׁבַע",
        "שְׁמוֹנֶה",
        "תֵּשַׁע",
        "עֶשֶׂר",
        "אַחַת עֶשְׂרֵה",
        "שְׁתֵּים עֶשְׂרֵה",
    ],
    teen_units: [
        "אַחַת",
        "שְׁתֵּים",
        "שְׁלוֹשׁ",
        "אַרְבַּע",
        "חֲמֵשׁ",
        "שֵׁשׁ",
        "שְׁבַע",
        "שְׁמוֹנֶה",
        "תְּשַׁע",
    ],
    tens: ["עֶשְׂרִים", "שְׁלוֹשִׁים", "אַרְבָּעִים", "חֲמִישִּׁים"],
    relative: [
        (20, "עֶשְׂרִים לְ"),
        (15, "רֶבַע לְ"),
        (10, "עֲשָׂרָה לְ"),
        (5, "חֲמִישָּׁה לְ"),
        (4, "אַרְבַּע דַּקּוֹת לְ"),
        (3, "שָׁלוֹשׁ דַּקּוֹת לְ"),
        (2, "שְׁתֵּי דַּקּוֹת לְ"),
        (1, "דַּקָּה לְ"),
    ],
    five: "חֲמִישָּׁה",
    ten: "עֲשָׂרָה",
    one_minute: "דַּקָּה אַחַת",
    two_minutes: "שְׁתֵּי דַּקּוֹת",
    minutes: "דַּקּוֹת",
    and: "וְ",
    teen: "עֶשְׂרֵה",
    quarter: "וְרֶבַע",
    half: "וְחֵצִי",
    midnight: "חֲצוֹת",
    day_periods: [
        "בַּבּוֹקֶר",
        "בַּצָּהֳרַיִים",
        "אַחַר הַצָּהֳרַיִים",
        "בָּעֶרֶב",
        "בַּלַּיְלָה",
    ],
};

/// Look up a one-based entry, falling back to the empty string.
fn ordinal<const N: usize>(table: &[&'static str; N], n: u8) -> &'static str {
    usize::from(n)
        .checked_sub(1)
        .and_then(|idx| table.get(idx))
        .copied()
        .unwrap_or_default()
}

impl Lexicon {
    /// Feminine numeral for `1..=12`. These double as the hour names.
    pub fn feminine(&self, n: u8) -> &'static str {
        ordinal(&self.hours, n)
    }

    /// Unit form used before the teen word (`1..=9`).
    pub fn teen_unit(&self, unit: u8) -> &'static str {
        ordinal(&self.teen_units, unit)
    }

    /// Tens word for 20, 30, 40 or 50.
    pub const fn tens(&self, value: u8) -> &'static str {
        match value {
            20 => self.tens[0],
            30 => self.tens[1],
            40 => self.tens[2],
            50 => self.tens[3],
            _ => "",
        }
    }

    /// The dedicated masculine form for 5, 10, 20 or 30 minutes.
    pub const fn round_minutes(&self, minute: u8) -> Option<&'static str> {
        match minute {
            5 => Some(self.five),
            10 => Some(self.ten),
            20 | 30 => Some(self.tens(minute)),
            _ => None,
        }
    }

    /// "N to" phrase for the given minutes remaining, if that remainder is
    /// phrased relative to the next hour.
    pub fn relative(&self, remaining: u8) -> Option<&'static str> {
        self.relative
            .iter()
            .find(|(key, _)| *key == remaining)
            .map(|(_, phrase)| *phrase)
    }

    /// Masculine five.
    pub const fn five(&self) -> &'static str {
        self.five
    }

    /// Singular "one minute".
    pub const fn one_minute(&self) -> &'static str {
        self.one_minute
    }

    /// Dual "two minutes".
    pub const fn two_minutes(&self) -> &'static str {
        self.two_minutes
    }

    /// Plural "minutes".
    pub const fn minutes(&self) -> &'static str {
        self.minutes
    }

    /// Conjunction prefix.
    pub const fn and(&self) -> &'static str {
        self.and
    }

    /// Teen word.
    pub const fn teen(&self) -> &'static str {
        self.teen
    }

    /// "and a quarter".
    pub const fn quarter(&self) -> &'static str {
        self.quarter
    }

    /// "and a half".
    pub const fn half(&self) -> &'static str {
        self.half
    }

    /// "midnight".
    pub const fn midnight(&self) -> &'static str {
        self.midnight
    }

    /// Suffix for a period of the day.
    pub const fn day_period(&self, period: DayPeriod) -> &'static str {
        match period {
            DayPeriod::Morning => self.day_periods[0],
            DayPeriod::Noon => self.day_periods[1],
            DayPeriod::Afternoon => self.day_periods[2],
            DayPeriod::Evening => self.day_periods[3],
            DayPeriod::Night => self.day_periods[4],
        }
    }

    /// Every entry in a fixed order. [`PLAIN`] and [`VOCALIZED`] line up
    /// entry for entry.
    pub fn entries(&self) -> Vec<&'static str> {
        let mut all = Vec::with_capacity(48);
        all.extend_from_slice(&self.hours);
        all.extend_from_slice(&self.teen_units);
        all.extend_from_slice(&self.tens);
        all.extend(self.relative.iter().map(|(_, phrase)| *phrase));
        all.extend_from_slice(&[
            self.five,
            self.ten,
            self.one_minute,
            self.two_minutes,
            self.minutes,
            self.and,
            self.teen,
            self.quarter,
            self.half,
            self.midnight,
        ]);
        all.extend_from_slice(&self.day_periods);
        all
    }
}
