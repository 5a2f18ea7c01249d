use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingScheme {
    Ayurvedic,
    Scientific,
}

impl RatingScheme {
    /// Abbreviation used in raw entries.
    pub fn prefix(self) -> &'static str {
        match self {
            RatingScheme::Ayurvedic => "Ayur",
            RatingScheme::Scientific => "Sci",
        }
    }

    /// Label rendered in bold in detail markup.
    pub fn label(self) -> &'static str {
        match self {
            RatingScheme::Ayurvedic => "Ayurvedic",
            RatingScheme::Scientific => "Scientific studies",
        }
    }
}

/// A qualitative evidence rating such as `Ayur: E` or `Sci: S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingCode {
    pub scheme: RatingScheme,
    pub code: char,
    pub value: &'static str,
}

impl RatingCode {
    const fn new(scheme: RatingScheme, code: char, value: &'static str) -> Self {
        Self {
            scheme,
            code,
            value,
        }
    }

    /// The canonical spelling, e.g. `Ayur: E`.
    pub fn key(&self) -> String {
        format!("{}: {}", self.scheme.prefix(), self.code)
    }

    fn pattern(&self) -> String {
        // ASCII word boundaries; any spacing after the colon.
        format!(
            r"(?i)(?-u:\b){}:\s*{}(?-u:\b)",
            self.scheme.prefix(),
            self.code
        )
    }

    pub fn to_markup(&self, value_class: &str) -> String {
        format!(
            r#"<strong>{}:</strong> <span class="{}">{}</span>"#,
            self.scheme.label(),
            value_class,
            self.value
        )
    }
}

/// Replacement order. No key occurs inside an earlier code's markup.
pub const RATING_CODES: [RatingCode; 7] = [
    RatingCode::new(RatingScheme::Ayurvedic, 'E', "Excellent"),
    RatingCode::new(RatingScheme::Ayurvedic, 'G', "Good"),
    RatingCode::new(RatingScheme::Ayurvedic, 'N', "Nominal"),
    RatingCode::new(RatingScheme::Scientific, 'S', "Strong"),
    RatingCode::new(RatingScheme::Scientific, 'M', "Moderate"),
    RatingCode::new(RatingScheme::Scientific, 'L', "Limited"),
    RatingCode::new(RatingScheme::Scientific, 'N', "None"),
];

static RATING_PATTERNS: LazyLock<Vec<(RatingCode, Regex)>> = LazyLock::new(|| {
    RATING_CODES
        .iter()
        .map(|rating| {
            let regex = Regex::new(&rating.pattern()).expect("valid rating code regex");
            (*rating, regex)
        })
        .collect()
});

/// Expands every rating code, one table entry at a time, in table order.
pub(crate) fn expand_ratings(text: &str, value_class: &str) -> String {
    let mut content = text.to_string();
    for (rating, regex) in RATING_PATTERNS.iter() {
        let markup = rating.to_markup(value_class);
        content = regex
            .replace_all(&content, regex::NoExpand(&markup))
            .into_owned();
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS: &str = "font-bold italic";

    #[test]
    fn table_order_is_fixed() {
        let keys: Vec<String> = RATING_CODES.iter().map(RatingCode::key).collect();
        assert_eq!(
            keys,
            [
                "Ayur: E", "Ayur: G", "Ayur: N", "Sci: S", "Sci: M", "Sci: L", "Sci: N"
            ]
        );
    }

    #[test]
    fn no_code_matches_an_earlier_replacement() {
        for (index, earlier) in RATING_CODES.iter().enumerate() {
            let markup = earlier.to_markup(CLASS);
            for later in &RATING_CODES[index..] {
                let regex = Regex::new(&later.pattern()).unwrap();
                assert!(
                    !regex.is_match(&markup),
                    "{} matches markup of {}",
                    later.key(),
                    earlier.key()
                );
            }
        }
    }

    #[test]
    fn spacing_and_case_are_flexible() {
        let expected = r#"<strong>Ayurvedic:</strong> <span class="font-bold italic">Excellent</span>"#;
        assert_eq!(expand_ratings("Ayur: E", CLASS), expected);
        assert_eq!(expand_ratings("ayur:e", CLASS), expected);
        assert_eq!(expand_ratings("AYUR:   E", CLASS), expected);
    }

    #[test]
    fn codes_need_word_boundaries() {
        assert_eq!(expand_ratings("Sci: Strong", CLASS), "Sci: Strong");
        assert_eq!(expand_ratings("MySci: S", CLASS), "MySci: S");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let out = expand_ratings("Sci: L; later Sci: L", CLASS);
        assert_eq!(out.matches("Limited").count(), 2);
        assert!(!out.contains("Sci: L"));
    }
}
