//! Error types for the `mahashaa-core` crate.
//!
//! Phrasing itself is total over every valid [`ClockTime`]; the only
//! fallible step is getting a valid time in the first place. All such
//! failures surface as [`TimeError`].
//!
//! [`ClockTime`]: crate::clock::ClockTime

/// Errors that can occur while building a clock time or phrasing minutes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The input is not of the form `HH:MM`.
    #[error("invalid time format {input:?}: expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected input, verbatim.
        input: String,
    },

    /// The hour component is outside `0..=23`.
    #[error("hour {hour} out of range (0-23)")]
    HourOutOfRange {
        /// The rejected hour.
        hour: u8,
    },

    /// The minute component is outside the accepted range.
    #[error("minute {minute} out of range")]
    MinuteOutOfRange {
        /// The rejected minute.
        minute: u8,
    },
}
