use crate::error::InflectError;
use crate::text::{case, tokenize, SplitMode};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    // A recognized prefix only counts when the next character does not continue a lowercase word.
    static ref ACCESSOR_PREFIX: Regex = Regex::new(r"^(?:set|get|is|has)([^a-zöäüß])").unwrap();
}

/// Leading words stripped when deriving a bare property name.
pub const ACCESSOR_PREFIXES: &[&str] = &["set", "get", "is", "has"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorOption {
    NoSanitizing,
    IntelligentSplitting,
}

impl FromStr for AccessorOption {
    type Err = InflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noSanitizing" | "ns" => Ok(AccessorOption::NoSanitizing),
            "intelligentSplitting" | "is" => Ok(AccessorOption::IntelligentSplitting),
            other => Err(InflectError::InvalidOption(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessorOptions {
    pub no_sanitizing: bool,
    pub intelligent_splitting: bool,
}

impl AccessorOptions {
    pub fn split_mode(&self) -> SplitMode {
        SplitMode::from(self.intelligent_splitting)
    }

    fn words(&self, input: &str) -> Vec<String> {
        let source = if self.no_sanitizing {
            input.to_string()
        } else {
            strip_accessor_prefix(input)
        };
        tokenize(&source, self.split_mode())
    }
}

impl FromIterator<AccessorOption> for AccessorOptions {
    fn from_iter<T: IntoIterator<Item = AccessorOption>>(iter: T) -> Self {
        let mut options = AccessorOptions::default();
        for option in iter {
            match option {
                AccessorOption::NoSanitizing => options.no_sanitizing = true,
                AccessorOption::IntelligentSplitting => options.intelligent_splitting = true,
            }
        }
        options
    }
}

/// Trim `input` and drop a leading `set`, `get`, `is` or `has`.
///
/// `isMyProperty` loses its prefix, `issetProperty` does not.
pub fn strip_accessor_prefix(input: &str) -> String {
    ACCESSOR_PREFIX.replace(input.trim(), "$1").into_owned()
}

/// `myProperty` → `getMyProperty`; `prefix` defaults to `get` and may be empty.
pub fn to_getter(input: &str, prefix: Option<&str>, options: AccessorOptions) -> String {
    let prefix = prefix.unwrap_or("get");
    format!("{}{}", prefix, case::camel(&options.words(input)))
}

pub fn to_setter(input: &str, options: AccessorOptions) -> String {
    format!("set{}", case::camel(&options.words(input)))
}

/// Camel-back property name with any accessor prefix removed.
pub fn to_property(input: &str, options: AccessorOptions) -> String {
    case::camel_back(&options.words(input))
}
