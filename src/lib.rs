pub mod cli;
pub mod config;
pub mod error;
pub mod inflector;
pub mod plural;
pub mod text;

pub use config::Config;
pub use error::InflectError;
pub use inflector::{
    deterministic_id, to_camel_back, to_camel_case, to_comparable, to_dashed, to_database,
    to_file, to_getter, to_human, to_property, to_setter, to_slug, to_spaced_upper,
    to_underscore, tokenize, AccessorOption, AccessorOptions,
};
pub use plural::{InflectorAdapter, Pluralizer};
pub use text::SplitMode;
