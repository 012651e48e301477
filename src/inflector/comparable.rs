use crate::text::{to_slug, tokenize, SplitMode};
use std::collections::BTreeMap;

/// Occurrence count per distinct word of one input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<String, usize>,
}

impl Tally {
    pub fn from_input(input: &str) -> Self {
        tokenize(&to_slug(input), SplitMode::Dumb)
            .into_iter()
            .collect()
    }

    /// Sorted, space joined rendering; `annotate` appends each word's count.
    pub fn render(self, annotate: bool) -> String {
        let mut parts: Vec<String> = self
            .counts
            .into_iter()
            .map(|(word, count)| {
                if annotate {
                    format!("{}{}", word, count)
                } else {
                    word
                }
            })
            .collect();
        parts.sort_unstable();
        parts.join(" ")
    }
}

impl FromIterator<String> for Tally {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut counts = BTreeMap::new();
        for word in iter {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts }
    }
}

/// Word order independent key for fuzzy matching.
///
/// `"the white fox and the hen"` becomes `"and1 fox1 hen1 the2 white1"`, or
/// `"and fox hen the white"` without counts.
pub fn to_comparable(input: &str, count_occurrences: bool) -> String {
    Tally::from_input(input).render(count_occurrences)
}

/// UUID shaped fingerprint of the counted comparable form.
///
/// Not a random or versioned UUID: the 32 hex digits are the MD5 digest of
/// `to_comparable(input, true)`, so `"Max Mustermann"` and
/// `"Mustermann, Max"` share an id.
pub fn deterministic_id(input: &str) -> String {
    let digest = format!("{:x}", md5::compute(to_comparable(input, true).as_bytes()));
    format!(
        "{}-{}-{}-{}-{}",
        &digest[0..8],
        &digest[8..12],
        &digest[12..16],
        &digest[16..20],
        &digest[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore";
    const WEIT: &str = "Weit hinten, hinter den Wortbergen, fern der Länder Vokalien und Konsonantien leben die Blindtexte";
    const FERN: &str = "Fern, weit hinten, hinter den Wortbergen, der Länder Vokalien und Konsonantien leben die Blindtexte";
    const HINTER: &str = "Weit hinten, hinter den Konsonantien leben die Blindtexte. Hinter den Wortbergen, fern der Länder Vokalien und ";

    #[test]
    fn test_tally_counts() {
        let tally = Tally::from_input("the white fox and the hen");
        assert_eq!(tally.clone().render(true), "and1 fox1 hen1 the2 white1");
        assert_eq!(tally.render(false), "and fox hen the white");
        assert_eq!(Tally::from_input(""), Tally::default());
    }

    #[test]
    fn test_comparable_vectors() {
        assert_eq!(to_comparable("first name last name ", true), "first1 last1 name2");
        assert_eq!(to_comparable("first name last name ", false), "first last name");
        assert_eq!(to_comparable("max mustermann", true), "max1 mustermann1");
        assert_eq!(to_comparable("Mustermann, Max ", true), "max1 mustermann1");
        assert_eq!(to_comparable("max mustermann", false), "max mustermann");
        assert_eq!(
            to_comparable(LOREM, true),
            "adipiscing1 amet1 consectetur1 do1 dolor1 eiusmod1 elit1 incididunt1 ipsum1 labore1 lorem1 sed1 sit1 tempor1 ut1"
        );
        assert_eq!(
            to_comparable(LOREM, false),
            "adipiscing amet consectetur do dolor eiusmod elit incididunt ipsum labore lorem sed sit tempor ut"
        );
        assert_eq!(
            to_comparable(HINTER, true),
            "blindtexte1 den2 der1 die1 fern1 hinten1 hinter2 konsonantien1 laender1 leben1 und1 vokalien1 weit1 wortbergen1"
        );
    }

    #[test]
    fn test_comparable_ignores_word_order() {
        let expected = "blindtexte1 den1 der1 die1 fern1 hinten1 hinter1 konsonantien1 laender1 leben1 und1 vokalien1 weit1 wortbergen1";
        assert_eq!(to_comparable(WEIT, true), expected);
        assert_eq!(to_comparable(FERN, true), expected);
    }

    #[test]
    fn test_comparable_degenerate_input() {
        assert_eq!(to_comparable("", true), "");
        assert_eq!(to_comparable(" ,.;- ", false), "");
    }

    #[test]
    fn test_deterministic_id_vectors() {
        assert_eq!(
            deterministic_id("first name last name "),
            "7f9f995d-6b94-460e-0158-edd97a8b016a"
        );
        assert_eq!(deterministic_id("max mustermann"), "c47276d9-be31-5329-40d9-25fc290609ec");
        assert_eq!(deterministic_id("mustermann, max "), "c47276d9-be31-5329-40d9-25fc290609ec");
        assert_eq!(deterministic_id(LOREM), "6140505b-14bf-c388-c3e5-c400ce11b26c");
        assert_eq!(deterministic_id(HINTER), "d0a3d3f6-8134-825f-1c60-eac5b7f737c1");
        assert_eq!(deterministic_id(WEIT), "867e6598-22ac-b7a0-91a9-d1a67e21b251");
        assert_eq!(deterministic_id(FERN), "867e6598-22ac-b7a0-91a9-d1a67e21b251");
    }

    #[test]
    fn test_deterministic_id_shape_and_stability() {
        let id = deterministic_id(WEIT);
        assert_eq!(id, deterministic_id(FERN));
        assert_eq!(id, deterministic_id(WEIT));

        let groups: Vec<usize> = id.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }
}
