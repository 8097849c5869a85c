//! Choosing how a time is phrased.
//!
//! Every [`ClockTime`] is phrased in exactly one way. The guards below are
//! evaluated in strict priority order and the first match wins:
//!
//! 1. **Relative**: the minutes left in the hour are one of
//!    [`RELATIVE_REMAINDERS`]: "רבע לשמונה".
//! 2. **Exact hour**: minute 0: "עשר".
//! 3. **Quarter / half**: minute 15 or 30: "עשר ורבע", "עשר וחצי".
//! 4. **Digital, low**: minutes 1 to 19: "עשר ושבע דקות".
//! 5. **Digital, high**: everything else: "עשר שלושים ותשע".

use serde::Serialize;

use crate::clock::ClockTime;

/// Minutes-remaining values that are phrased as "N to the next hour".
/// Remainders 6 through 9 deliberately stay digital.
pub const RELATIVE_REMAINDERS: [u8; 8] = [20, 15, 10, 5, 4, 3, 2, 1];

/// Minutes below which the digital form joins the count with "and".
const LOW_MINUTES_END: u8 = 20;

/// Which half of "quarter / half past" applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fraction {
    /// Fifteen minutes past.
    Quarter,
    /// Thirty minutes past.
    Half,
}

/// The phrasing strategy for a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum Phrasing {
    /// "N to" the next hour.
    Relative {
        /// Minutes left until the next hour.
        remaining: u8,
    },
    /// On the hour.
    ExactHour,
    /// Quarter or half past.
    QuarterHalf {
        /// Which of the two.
        fraction: Fraction,
    },
    /// Hour "and" a minute count below twenty.
    DigitalLow,
    /// Hour followed by a minute count of twenty or more.
    DigitalHigh,
}

impl Phrasing {
    /// Select the strategy for `time`.
    pub fn select(time: ClockTime) -> Self {
        let remaining = time.minutes_to_next_hour();
        if RELATIVE_REMAINDERS.contains(&remaining) {
            return Self::Relative { remaining };
        }
        match time.minute() {
            0 => Self::ExactHour,
            15 => Self::QuarterHalf {
                fraction: Fraction::Quarter,
            },
            30 => Self::QuarterHalf {
                fraction: Fraction::Half,
            },
            minute if minute < LOW_MINUTES_END => Self::DigitalLow,
            _ => Self::DigitalHigh,
        }
    }

    /// Whether the hour named is the next one rather than the current one.
    pub const fn is_relative(self) -> bool {
        matches!(self, Self::Relative { .. })
    }

    /// Label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relative { .. } => "relative",
            Self::ExactHour => "exact_hour",
            Self::QuarterHalf {
                fraction: Fraction::Quarter,
            } => "quarter",
            Self::QuarterHalf {
                fraction: Fraction::Half,
            } => "half",
            Self::DigitalLow => "digital_low",
            Self::DigitalHigh => "digital_high",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn select(hour: u8, minute: u8) -> Phrasing {
        Phrasing::select(ClockTime::new(hour, minute).unwrap())
    }

    #[test]
    fn relative_takes_priority() {
        assert_eq!(select(10, 40), Phrasing::Relative { remaining: 20 });
        assert_eq!(select(19, 45), Phrasing::Relative { remaining: 15 });
        assert_eq!(select(23, 50), Phrasing::Relative { remaining: 10 });
        assert_eq!(select(10, 55), Phrasing::Relative { remaining: 5 });
        assert_eq!(select(10, 59), Phrasing::Relative { remaining: 1 });
    }

    #[test]
    fn remainders_six_to_nine_stay_digital() {
        for minute in 51..=54 {
            assert_eq!(select(10, minute), Phrasing::DigitalHigh, "minute {minute}");
        }
    }

    #[test]
    fn exact_quarter_half() {
        assert_eq!(select(10, 0), Phrasing::ExactHour);
        assert_eq!(
            select(10, 15),
            Phrasing::QuarterHalf {
                fraction: Fraction::Quarter
            }
        );
        assert_eq!(
            select(10, 30),
            Phrasing::QuarterHalf {
                fraction: Fraction::Half
            }
        );
    }

    #[test]
    fn digital_split_at_twenty() {
        assert_eq!(select(10, 1), Phrasing::DigitalLow);
        assert_eq!(select(10, 19), Phrasing::DigitalLow);
        assert_eq!(select(10, 20), Phrasing::DigitalHigh);
        assert_eq!(select(10, 39), Phrasing::DigitalHigh);
    }

    #[test]
    fn serializes_with_strategy_tag() {
        let json = serde_json::to_string(&select(19, 45)).unwrap();
        assert_eq!(json, r#"{"strategy":"relative","remaining":15}"#);
        let json = serde_json::to_string(&select(10, 0)).unwrap();
        assert_eq!(json, r#"{"strategy":"exact_hour"}"#);
        let json = serde_json::to_string(&select(10, 30)).unwrap();
        assert_eq!(json, r#"{"strategy":"quarter_half","fraction":"half"}"#);
    }

    #[test]
    fn labels() {
        assert_eq!(select(10, 15).as_str(), "quarter");
        assert!(select(10, 45).is_relative());
        assert!(!select(10, 44).is_relative());
    }
}
