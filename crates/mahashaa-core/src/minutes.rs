//! Spoken form of a minute count.
//!
//! Round counts (multiples of five) use masculine numerals and never take
//! the unit word: "חמישה", "עשרים וחמישה". Everything else is counted in
//! feminine numerals, with "דקות" appended whenever the count would
//! otherwise be a single bare word: "שבע דקות", but "שלושים ותשע".

use crate::error::TimeError;
use crate::lexicon::{Lexicon, Vocalization};
use crate::nikud;

/// Phrase a minute count in `1..=59`.
///
/// The composer only reaches this for minutes it does not phrase some
/// other way, but every count in range has a spoken form.
///
/// # Errors
///
/// Returns [`TimeError::MinuteOutOfRange`] for 0 or anything above 59.
pub fn phrase_minutes(minute: u8, vocalization: Vocalization) -> Result<String, TimeError> {
    if minute == 0 || minute >= 60 {
        return Err(TimeError::MinuteOutOfRange { minute });
    }
    let words = minute_words(minute, vocalization.lexicon());
    Ok(match vocalization {
        Vocalization::Plain => words,
        Vocalization::Full => nikud::correct(&words),
    })
}

/// Uncorrected minute phrase, straight from the table. Callers pass
/// `1..=59`.
pub(crate) fn minute_words(minute: u8, lexicon: &Lexicon) -> String {
    if minute.checked_rem(5) == Some(0) {
        return round(minute, lexicon);
    }
    match minute {
        1 => lexicon.one_minute().to_owned(),
        2 => lexicon.two_minutes().to_owned(),
        _ => with_unit_word(counted(minute, lexicon), lexicon),
    }
}

/// Multiples of five: a dedicated word, or tens plus "and five". Fifteen
/// has neither and is counted as a teen.
fn round(minute: u8, lexicon: &Lexicon) -> String {
    if let Some(word) = lexicon.round_minutes(minute) {
        return word.to_owned();
    }
    if minute < 20 {
        return counted(minute, lexicon);
    }
    let (tens, unit) = split(minute);
    let tens = lexicon.tens(tens);
    if unit == 0 {
        tens.to_owned()
    } else {
        format!("{tens} {}{}", lexicon.and(), lexicon.five())
    }
}

/// Feminine count: plain numeral, teen, or tens plus "and" unit.
fn counted(minute: u8, lexicon: &Lexicon) -> String {
    if minute < 12 {
        return lexicon.feminine(minute).to_owned();
    }
    if minute < 20 {
        return format!(
            "{} {}",
            lexicon.teen_unit(minute.saturating_sub(10)),
            lexicon.teen()
        );
    }
    let (tens, unit) = split(minute);
    let tens = lexicon.tens(tens);
    if unit == 0 {
        tens.to_owned()
    } else {
        format!("{tens} {}{}", lexicon.and(), lexicon.feminine(unit))
    }
}

/// A lone numeral is ambiguous; spell out the unit.
fn with_unit_word(phrase: String, lexicon: &Lexicon) -> String {
    if phrase.contains(' ') {
        phrase
    } else {
        format!("{phrase} {}", lexicon.minutes())
    }
}

/// Split into the round tens value and the unit digit.
const fn split(minute: u8) -> (u8, u8) {
    let unit = match minute.checked_rem(10) {
        Some(unit) => unit,
        None => 0,
    };
    (minute.saturating_sub(unit), unit)
}
