use crate::text::extensions::split_extension;
use crate::text::transliteration::transliterate;
use std::path::MAIN_SEPARATOR;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || is_combining_mark(ch)
}

/// Render `input` as a lowercase, dash separated, ASCII folded slug.
///
/// `"Annahäuser_Römertopf.jpg"` becomes `"annahaeuser-roemertopf-jpg"`.
/// Slugs are fixed points: `to_slug(&to_slug(x)) == to_slug(x)`.
pub fn to_slug(input: &str) -> String {
    let composed: String = input.nfc().collect();
    let folded = transliterate(&composed);

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;

    for ch in folded.chars() {
        if is_word_char(ch) {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Like [`to_slug`], but keeps a recognized file extension and, when
/// `expect_path` is set, the directory part of a path.
///
/// ```
/// use inflect::text::slug::to_file;
///
/// assert_eq!(to_file("Given string.jpg", false), "given-string.jpg");
/// assert_eq!(to_file("Backup.TAR.GZ", false), "backup.TAR.GZ");
/// ```
pub fn to_file(input: &str, expect_path: bool) -> String {
    let (stem, extension) = match split_extension(input) {
        Some((dot, ext)) => (input[..dot].trim(), Some(ext)),
        None => (input, None),
    };

    let (prefix, basename) = if expect_path {
        split_path(stem)
    } else {
        (String::new(), stem.to_string())
    };

    let mut out = prefix;
    out.push_str(&to_slug(&basename));
    if let Some(ext) = extension {
        out.push('.');
        out.push_str(ext);
    }
    out
}

/// Split a path into its directory prefix (with trailing separator) and the
/// final component. Both `/` and `\` count as separators and are rewritten
/// to the platform separator.
fn split_path(path: &str) -> (String, String) {
    let normalized: String = path
        .chars()
        .map(|ch| if ch == '/' || ch == '\\' { MAIN_SEPARATOR } else { ch })
        .collect();

    match normalized.rfind(MAIN_SEPARATOR) {
        Some(idx) => {
            let (dir, rest) = normalized.split_at(idx + MAIN_SEPARATOR.len_utf8());
            (dir.to_string(), rest.to_string())
        }
        None => (String::new(), normalized),
    }
}
