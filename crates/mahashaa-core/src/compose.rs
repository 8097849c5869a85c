//! Assembling the full phrase for a clock time.
//!
//! The phrase is the strategy body (see [`Phrasing`]) followed by a
//! day-period suffix. Midnight is special: when the hour being named is
//! midnight itself, the word "חצות" replaces the hour name and no suffix is
//! added. That happens at 00:mm unless the time is phrased relative to
//! 01:00, and at 23:mm when it is phrased relative to midnight.

use tracing::debug;

use crate::clock::ClockTime;
use crate::lexicon::{Lexicon, Vocalization};
use crate::minutes::minute_words;
use crate::nikud;
use crate::phrasing::{Fraction, Phrasing};

/// Phrase `time` in colloquial Hebrew.
///
/// With [`Vocalization::Full`] the result carries nikud, prefix vowels are
/// corrected for the words they attach to, and the text is NFC. With
/// [`Vocalization::Plain`] the result equals the vocalized phrase with its
/// marks stripped.
pub fn compose(time: ClockTime, vocalization: Vocalization) -> String {
    let lexicon = vocalization.lexicon();
    let phrasing = Phrasing::select(time);
    let midnight = names_midnight(time, phrasing);

    debug!(
        hour = time.hour(),
        minute = time.minute(),
        strategy = phrasing.as_str(),
        midnight,
        "composing phrase"
    );

    let hour = if midnight {
        lexicon.midnight()
    } else if phrasing.is_relative() {
        lexicon.feminine(time.next_display_hour())
    } else {
        lexicon.feminine(time.display_hour())
    };

    let mut phrase = body(time, phrasing, hour, lexicon);
    if !midnight {
        phrase.push(' ');
        phrase.push_str(lexicon.day_period(time.day_period()));
    }

    match vocalization {
        Vocalization::Plain => phrase,
        Vocalization::Full => nikud::correct(&phrase),
    }
}

/// Whether the hour named in the phrase is midnight.
fn names_midnight(time: ClockTime, phrasing: Phrasing) -> bool {
    match time.hour() {
        0 => !phrasing.is_relative(),
        23 => phrasing.is_relative(),
        _ => false,
    }
}

/// The phrase without its day-period suffix.
fn body(time: ClockTime, phrasing: Phrasing, hour: &str, lexicon: &Lexicon) -> String {
    match phrasing {
        Phrasing::Relative { remaining } => {
            format!("{}{hour}", lexicon.relative(remaining).unwrap_or_default())
        }
        Phrasing::ExactHour => hour.to_owned(),
        Phrasing::QuarterHalf { fraction } => {
            let connector = match fraction {
                Fraction::Quarter => lexicon.quarter(),
                Fraction::Half => lexicon.half(),
            };
            format!("{hour} {connector}")
        }
        Phrasing::DigitalLow => format!(
            "{hour} {}{}",
            lexicon.and(),
            minute_words(time.minute(), lexicon)
        ),
        Phrasing::DigitalHigh => format!("{hour} {}", minute_words(time.minute(), lexicon)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn plain(hour: u8, minute: u8) -> String {
        compose(ClockTime::new(hour, minute).unwrap(), Vocalization::Plain)
    }

    fn vocalized(hour: u8, minute: u8) -> String {
        compose(ClockTime::new(hour, minute).unwrap(), Vocalization::Full)
    }

    #[test]
    fn midnight_alone() {
        assert_eq!(plain(0, 0), "חצות");
        assert_eq!(vocalized(0, 0), nikud::normalize("חֲצוֹת"));
    }

    #[test]
    fn midnight_with_minutes_has_no_suffix() {
        assert_eq!(plain(0, 3), "חצות ושלוש דקות");
        assert_eq!(plain(0, 30), "חצות וחצי");
    }

    #[test]
    fn relative_to_midnight() {
        assert_eq!(plain(23, 50), "עשרה לחצות");
        assert_eq!(plain(23, 45), "רבע לחצות");
        assert_eq!(vocalized(23, 50), nikud::normalize("עֲשָׂרָה לַחֲצוֹת"));
    }

    #[test]
    fn relative_from_midnight_names_one() {
        assert_eq!(plain(0, 45), "רבע לאחת בלילה");
    }

    #[test]
    fn eleven_at_night_is_not_midnight() {
        assert_eq!(plain(23, 0), "אחת עשרה בלילה");
        assert_eq!(plain(23, 30), "אחת עשרה וחצי בלילה");
    }

    #[test]
    fn noon_reads_twelve() {
        assert_eq!(plain(12, 0), "שתים עשרה בצהריים");
        assert_eq!(plain(11, 45), "רבע לשתים עשרה בבוקר");
    }

    #[test]
    fn suffix_follows_the_current_hour() {
        assert_eq!(plain(10, 40), "עשרים לאחת עשרה בבוקר");
        assert_eq!(plain(17, 50), "עשרה לשש אחר הצהריים");
    }

    #[test]
    fn digital_forms() {
        assert_eq!(plain(10, 7), "עשר ושבע דקות בבוקר");
        assert_eq!(plain(10, 39), "עשר שלושים ותשע בבוקר");
        assert_eq!(plain(10, 20), "עשר עשרים בבוקר");
        assert_eq!(plain(9, 1), "תשע ודקה אחת בבוקר");
    }

    #[test]
    fn relative_small_remainders() {
        assert_eq!(plain(19, 56), "ארבע דקות לשמונה בערב");
        assert_eq!(plain(19, 59), "דקה לשמונה בערב");
    }

    #[test]
    fn vocalized_prefixes_are_corrected() {
        assert_eq!(vocalized(19, 45), nikud::normalize("רֶבַע לִשְׁמוֹנֶה בָּעֶרֶב"));
        assert_eq!(vocalized(10, 30), nikud::normalize("עֶשֶׂר וָחֵצִי בַּבּוֹקֶר"));
        assert_eq!(vocalized(3, 10), nikud::normalize("שָׁלוֹשׁ וַעֲשָׂרָה בַּלַּיְלָה"));
    }
}
