//! Visual-order output for terminals that lay right-to-left text out
//! left-to-right.

use crate::nikud::clusters;

/// Reverse `text` cluster by cluster: base characters come out back to
/// front, and every mark stays on the letter it was attached to, in its
/// original order.
///
/// Applying this twice gives back the input for any text that does not
/// start with a mark.
pub fn reverse_for_display(text: &str) -> String {
    clusters(text).into_iter().rev().collect()
}
