pub mod case;
pub mod extensions;
pub mod slug;
pub mod tokenizer;
pub mod transliteration;

pub use slug::{to_file, to_slug};
pub use tokenizer::{tokenize, SplitMode};
