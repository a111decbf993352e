//! Display text for the top box office figure.

use common::model::report::TopMeasure;
use num_format::{Locale, ToFormattedString};

/// Rendered in place of a figure that could not be read.
pub const UNAVAILABLE: &str = "—";

/// Formats the top box office figure for the summary card.
///
/// The value is truncated to whole units and grouped in thousands
/// (`₹1,234,567`). A genuine zero is shown as `₹0`; only
/// [`TopMeasure::Unavailable`] becomes the dash.
pub fn display_top_measure(measure: TopMeasure, currency: &str) -> String {
    match measure {
        TopMeasure::Unavailable => UNAVAILABLE.to_string(),
        TopMeasure::Value(v) => {
            let whole = v.trunc() as i64;
            format!("{}{}", currency, whole.to_formatted_string(&Locale::en))
        }
    }
}
