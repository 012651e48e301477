use lazy_static::lazy_static;
use std::collections::HashMap;

/// Ordered folding rules: every character of the pattern maps to the replacement.
const TRANSLITERATIONS: &[(&str, &str)] = &[
    ("ÀÁÂÃÅǺĀĂĄǍ", "A"),
    ("ÆǼ", "AE"),
    ("Ä", "Ae"),
    ("ÇĆĈĊČ", "C"),
    ("ÐĎĐ", "D"),
    ("ÈÉÊËĒĔĖĘĚ", "E"),
    ("ĜĞĠĢҐ", "G"),
    ("ĤĦ", "H"),
    ("ÌÍÎÏĨĪĬǏĮİІ", "I"),
    ("Ĳ", "IJ"),
    ("Ĵ", "J"),
    ("Ķ", "K"),
    ("ĹĻĽĿŁ", "L"),
    ("ÑŃŅŇ", "N"),
    ("ÒÓÔÕŌŎǑŐƠØǾ", "O"),
    ("Œ", "OE"),
    ("Ö", "Oe"),
    ("ŔŖŘ", "R"),
    ("ŚŜŞȘŠ", "S"),
    ("ẞ", "SS"),
    ("ŢȚŤŦ", "T"),
    ("Þ", "TH"),
    ("ÙÚÛŨŪŬŮŰŲƯǓǕǗǙǛ", "U"),
    ("Ü", "Ue"),
    ("Ŵ", "W"),
    ("ÝŸŶ", "Y"),
    ("Є", "Ye"),
    ("Ї", "Yi"),
    ("ŹŻŽ", "Z"),
    ("àáâãåǻāăąǎª", "a"),
    ("äæǽ", "ae"),
    ("çćĉċč", "c"),
    ("ðďđ", "d"),
    ("èéêëēĕėęě", "e"),
    ("ƒ", "f"),
    ("ĝğġģґ", "g"),
    ("ĥħ", "h"),
    ("ìíîïĩīĭǐįıі", "i"),
    ("ĳ", "ij"),
    ("ĵ", "j"),
    ("ķ", "k"),
    ("ĺļľŀł", "l"),
    ("ñńņňŉ", "n"),
    ("òóôõōŏǒőơøǿº", "o"),
    ("öœ", "oe"),
    ("ŕŗř", "r"),
    ("śŝşșšſ", "s"),
    ("ß", "ss"),
    ("ţțťŧ", "t"),
    ("þ", "th"),
    ("ùúûũūŭůűųưǔǖǘǚǜ", "u"),
    ("ü", "ue"),
    ("ŵ", "w"),
    ("ýÿŷ", "y"),
    ("є", "ye"),
    ("ї", "yi"),
    ("źżž", "z"),
];

lazy_static! {
    static ref FOLDING: HashMap<char, &'static str> = build_folding();
}

fn build_folding() -> HashMap<char, &'static str> {
    let mut map = HashMap::new();
    for (pattern, replacement) in TRANSLITERATIONS {
        for ch in pattern.chars() {
            let previous = map.insert(ch, *replacement);
            debug_assert!(
                previous.is_none(),
                "transliteration rules overlap on {:?}",
                ch
            );
        }
    }
    map
}

/// ASCII replacement for a single character, if the table knows it.
pub fn fold_char(ch: char) -> Option<&'static str> {
    FOLDING.get(&ch).copied()
}

/// Lowercase `input` and replace every known accented/special character with
/// its ASCII spelling.
///
/// Characters the table does not know are lowercased and looked up once more,
/// so `Ƒ` folds the same way `ƒ` does.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut push_folded =
        |replacement: &str| out.extend(replacement.chars().map(|c| c.to_ascii_lowercase()));

    for ch in input.chars() {
        if let Some(replacement) = fold_char(ch) {
            push_folded(replacement);
            continue;
        }

        for lower in ch.to_lowercase() {
            match fold_char(lower) {
                Some(replacement) => push_folded(replacement),
                None => push_folded(lower.encode_utf8(&mut [0; 4])),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_do_not_overlap() {
        let declared: usize = TRANSLITERATIONS
            .iter()
            .map(|(pattern, _)| pattern.chars().count())
            .sum();
        assert_eq!(declared, FOLDING.len());
    }

    #[test]
    fn test_german_umlauts() {
        assert_eq!(transliterate("Annahäuser_Römertopf"), "annahaeuser_roemertopf");
        assert_eq!(transliterate("Straße"), "strasse");
        assert_eq!(transliterate("Ärger"), "aerger");
    }

    #[test]
    fn test_multi_letter_replacements() {
        assert_eq!(fold_char('Þ'), Some("TH"));
        assert_eq!(fold_char('ĳ'), Some("ij"));
        assert_eq!(fold_char('x'), None);
    }

    #[test]
    fn test_uppercase_without_rule_folds_through_lowercase() {
        assert_eq!(transliterate("Ƒ"), "f");
        assert_eq!(transliterate("ƒ"), "f");
    }

    #[test]
    fn test_unknown_scripts_pass_through() {
        assert_eq!(transliterate("の話"), "の話");
        assert_eq!(transliterate("Жук"), "жук");
    }
}
