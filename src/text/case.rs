use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first character of `word`, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    match word.graphemes(true).next() {
        Some(first) => {
            let mut chars = first.chars();
            let mut out = String::with_capacity(word.len());
            if let Some(head) = chars.next() {
                out.extend(head.to_uppercase());
            }
            out.push_str(chars.as_str());
            out.push_str(&word[first.len()..]);
            out
        }
        None => String::new(),
    }
}

/// Lowercase the first character of `word`, leaving the rest untouched.
pub fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => head.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `["given", "string"]` → `Given String`
pub fn spaced_title<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| capitalize(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `["given", "string"]` → `GivenString`
pub fn camel<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(|t| capitalize(t.as_ref())).collect()
}

/// `["given", "string"]` → `givenString`
pub fn camel_back<S: AsRef<str>>(tokens: &[S]) -> String {
    decapitalize(&camel(tokens))
}

pub fn dashed<S: AsRef<str>>(tokens: &[S]) -> String {
    join(tokens, "-")
}

pub fn underscored<S: AsRef<str>>(tokens: &[S]) -> String {
    join(tokens, "_")
}

fn join<S: AsRef<str>>(tokens: &[S], separator: &str) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}
