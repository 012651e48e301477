pub mod accessor;
pub mod comparable;

use crate::text::{case, SplitMode};

pub use crate::text::{to_file, to_slug, tokenize};
pub use accessor::{to_getter, to_property, to_setter, AccessorOption, AccessorOptions};
pub use comparable::{deterministic_id, to_comparable, Tally};

/// `"Given string"` → `"Given String"`
pub fn to_spaced_upper(input: &str, mode: SplitMode) -> String {
    case::spaced_title(&tokenize(input, mode))
}

/// Alias of [`to_spaced_upper`].
pub fn to_human(input: &str, mode: SplitMode) -> String {
    to_spaced_upper(input, mode)
}

/// `"another.String-you wouldWant"` → `"AnotherStringYouWouldWant"`
pub fn to_camel_case(input: &str, mode: SplitMode) -> String {
    case::camel(&tokenize(input, mode))
}

/// `"another.String-you wouldWant"` → `"anotherStringYouWouldWant"`
pub fn to_camel_back(input: &str, mode: SplitMode) -> String {
    case::camel_back(&tokenize(input, mode))
}

/// `"Given string"` → `"given-string"`
pub fn to_dashed(input: &str, mode: SplitMode) -> String {
    case::dashed(&tokenize(input, mode))
}

/// `"Given string"` → `"given_string"`
pub fn to_underscore(input: &str, mode: SplitMode) -> String {
    case::underscored(&tokenize(input, mode))
}

/// Alias of [`to_underscore`], for column and table names.
pub fn to_database(input: &str, mode: SplitMode) -> String {
    to_underscore(input, mode)
}
