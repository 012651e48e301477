use crate::plural::InflectorAdapter;
use lazy_static::lazy_static;
use regex::Regex;

/// (singular, plural candidates); the first candidate is preferred.
const IRREGULAR: &[(&str, &[&str])] = &[
    ("person", &["people", "persons"]),
    ("man", &["men"]),
    ("woman", &["women"]),
    ("child", &["children"]),
    ("tooth", &["teeth"]),
    ("foot", &["feet"]),
    ("goose", &["geese"]),
    ("mouse", &["mice"]),
    ("ox", &["oxen"]),
    ("criterion", &["criteria"]),
    ("phenomenon", &["phenomena"]),
    ("datum", &["data"]),
    ("medium", &["media", "mediums"]),
    ("appendix", &["appendices", "appendixes"]),
    ("index", &["indices", "indexes"]),
    ("cactus", &["cacti", "cactuses"]),
    ("octopus", &["octopuses", "octopi"]),
    ("thief", &["thieves"]),
];

const UNCOUNTABLE: &[&str] = &[
    "deer",
    "equipment",
    "fish",
    "information",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

lazy_static! {
    static ref PLURAL_RULES: Vec<(Regex, &'static str)> = compile(&[
        (r"(quiz)$", "${1}zes"),
        (r"(matr|vert)(ix|ex)$", "${1}ices"),
        (r"(alumn|bacill|foc|fung|nucle|radi|stimul|syllab|termin|hippopotam)us$", "${1}i"),
        (r"(bu|statu|campu|viru)s$", "${1}ses"),
        (r"(x|ch|ss|sh|zz)$", "${1}es"),
        (r"([^aeiouy]|qu)y$", "${1}ies"),
        (r"([lr])f$", "${1}ves"),
        (r"([^f])fe$", "${1}ves"),
        (r"(analy|ba|diagno|parenthe|progno|synop|the)sis$", "${1}ses"),
        (r"(buffal|her|potat|tomat|ech|torped|vet)o$", "${1}oes"),
        (r"s$", "ses"),
        (r"$", "s"),
    ]);
    static ref SINGULAR_RULES: Vec<(Regex, &'static str)> = compile(&[
        (r"(quiz)zes$", "${1}"),
        (r"(matr)ices$", "${1}ix"),
        (r"(vert)ices$", "${1}ex"),
        (r"(alumn|bacill|foc|fung|nucle|radi|stimul|syllab|termin|hippopotam)i$", "${1}us"),
        (r"(bu|statu|campu|viru)ses$", "${1}s"),
        (r"(x|ch|ss|sh|zz)es$", "${1}"),
        (r"([^aeiouy]|qu)ies$", "${1}y"),
        (r"([lr])ves$", "${1}f"),
        (r"([^f])ves$", "${1}fe"),
        (r"(analy|ba|diagno|parenthe|progno|synop|the)ses$", "${1}sis"),
        (r"(buffal|her|potat|tomat|ech|torped|vet)oes$", "${1}o"),
        (r"(ss|us|is)$", "${1}"),
        (r"s$", ""),
    ]);
}

fn compile(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

fn apply_rules(word: &str, rules: &[(Regex, &'static str)]) -> String {
    rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(word))
        .map(|(pattern, replacement)| pattern.replace(word, *replacement).into_owned())
        .unwrap_or_else(|| word.to_string())
}

/// Carry the capitalization of `original` over to `inflected`.
fn restore_case(original: &str, inflected: &str) -> String {
    let has_letters = original.chars().any(char::is_alphabetic);
    if has_letters && original.chars().all(|c| !c.is_lowercase()) && original.chars().count() > 1 {
        return inflected.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        return crate::text::case::capitalize(inflected);
    }
    inflected.to_string()
}

/// Rule based English inflection.
///
/// Irregular and uncountable words are looked up first, everything else goes
/// through ordered suffix rules. Every lookup produces a list of candidate
/// forms and the adapter answers with the first one.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishAdapter;

impl EnglishAdapter {
    pub const NAME: &'static str = "english";

    pub fn plural_candidates(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
            return vec![word.to_string()];
        }

        if let Some((_, plurals)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
            return plurals.iter().map(|p| restore_case(word, p)).collect();
        }
        if IRREGULAR.iter().any(|(_, plurals)| plurals.contains(&lower.as_str())) {
            return vec![word.to_string()];
        }

        vec![restore_case(word, &apply_rules(&lower, &PLURAL_RULES))]
    }

    pub fn singular_candidates(&self, word: &str) -> Vec<String> {
        let lower = word.to_lowercase();
        if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
            return vec![word.to_string()];
        }

        let irregular: Vec<String> = IRREGULAR
            .iter()
            .filter(|(_, plurals)| plurals.contains(&lower.as_str()))
            .map(|(singular, _)| restore_case(word, singular))
            .collect();
        if !irregular.is_empty() {
            return irregular;
        }
        if IRREGULAR.iter().any(|(singular, _)| *singular == lower) {
            return vec![word.to_string()];
        }

        vec![restore_case(word, &apply_rules(&lower, &SINGULAR_RULES))]
    }
}

fn first_or(candidates: Vec<String>, word: &str) -> String {
    candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| word.to_string())
}

impl InflectorAdapter for EnglishAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn to_singular(&self, plural_word: &str) -> String {
        first_or(self.singular_candidates(plural_word), plural_word)
    }

    fn to_plural(&self, singular_word: &str) -> String {
        first_or(self.plural_candidates(singular_word), singular_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_plural() {
        let adapter = EnglishAdapter;
        let cases = [
            ("access", "accesses"),
            ("address", "addresses"),
            ("agenda", "agendas"),
            ("alumnus", "alumni"),
            ("hippopotamus", "hippopotami"),
            ("batch", "batches"),
            ("city", "cities"),
            ("day", "days"),
            ("wolf", "wolves"),
            ("knife", "knives"),
            ("analysis", "analyses"),
            ("tomato", "tomatoes"),
            ("matrix", "matrices"),
            ("quiz", "quizzes"),
            ("bus", "buses"),
            ("person", "people"),
            ("child", "children"),
            ("sheep", "sheep"),
            ("house", "houses"),
        ];
        for (singular, plural) in cases {
            assert_eq!(adapter.to_plural(singular), plural, "plural of {:?}", singular);
        }
    }

    #[test]
    fn test_to_singular() {
        let adapter = EnglishAdapter;
        let cases = [
            ("accesses", "access"),
            ("addresses", "address"),
            ("agendas", "agenda"),
            ("criteria", "criterion"),
            ("batches", "batch"),
            ("alumni", "alumnus"),
            ("cities", "city"),
            ("wolves", "wolf"),
            ("knives", "knife"),
            ("analyses", "analysis"),
            ("tomatoes", "tomato"),
            ("matrices", "matrix"),
            ("quizzes", "quiz"),
            ("buses", "bus"),
            ("people", "person"),
            ("persons", "person"),
            ("houses", "house"),
            ("status", "status"),
            ("news", "news"),
        ];
        for (plural, singular) in cases {
            assert_eq!(adapter.to_singular(plural), singular, "singular of {:?}", plural);
        }
    }

    #[test]
    fn test_candidates_prefer_first_form() {
        let adapter = EnglishAdapter;
        assert_eq!(adapter.plural_candidates("person"), vec!["people", "persons"]);
        assert_eq!(adapter.to_plural("person"), "people");
    }

    #[test]
    fn test_case_is_preserved() {
        let adapter = EnglishAdapter;
        assert_eq!(adapter.to_plural("Person"), "People");
        assert_eq!(adapter.to_plural("CITY"), "CITIES");
        assert_eq!(adapter.to_singular("Addresses"), "Address");
    }

    #[test]
    fn test_already_inflected_words_are_kept() {
        let adapter = EnglishAdapter;
        assert_eq!(adapter.to_plural("people"), "people");
        assert_eq!(adapter.to_singular("child"), "child");
        assert_eq!(adapter.to_plural(""), "");
    }
}
