//! Colloquial Hebrew phrasing of clock times.
//!
//! Turns an `hour:minute` pair into the phrase a Hebrew speaker would say
//! ("רבע לשמונה בערב", "עשר ועשרה בבוקר", "עשרה לחצות"), optionally with
//! full nikud.
//!
//! ```text
//! ClockTime --> Phrasing::select --> compose (Lexicon, minutes) --> nikud::correct --> String
//!                                                                         |
//!                                                  display::reverse_for_display (terminals)
//! ```
//!
//! # Modules
//!
//! - [`clock`] -- [`ClockTime`] and [`DayPeriod`], plus `HH:MM` parsing.
//! - [`compose`] -- The phrase composer.
//! - [`display`] -- Visual-order reversal that keeps nikud on its letter.
//! - [`error`] -- [`TimeError`].
//! - [`lexicon`] -- Plain and vocalized word tables.
//! - [`minutes`] -- Spoken minute counts.
//! - [`nikud`] -- Prefix-vowel correction, mark stripping, NFC.
//! - [`phrasing`] -- Strategy selection.

pub mod clock;
pub mod compose;
pub mod display;
pub mod error;
pub mod lexicon;
pub mod minutes;
pub mod nikud;
pub mod phrasing;

pub use clock::{ClockTime, DayPeriod};
pub use compose::compose;
pub use display::reverse_for_display;
pub use error::TimeError;
pub use lexicon::{Lexicon, Vocalization};
pub use minutes::phrase_minutes;
pub use phrasing::{Fraction, Phrasing};

/// Phrase the current local time.
///
/// # Errors
///
/// Returns a [`TimeError`] if the system clock reports a time outside the
/// day, which a well-behaved clock never does.
pub fn phrase_now(vocalization: Vocalization) -> Result<String, TimeError> {
    Ok(compose(ClockTime::now()?, vocalization))
}
