use std::collections::BTreeMap;

/// Abbreviation -> display name lookup with identity fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookNames {
    names: BTreeMap<String, String>,
}

impl Default for BookNames {
    fn default() -> Self {
        Self::from_pairs([
            ("시", "시편"),
            ("잠", "잠언"),
            ("전", "전도서"),
            ("아", "아가"),
            ("마", "마태복음"),
            ("막", "마가복음"),
            ("눅", "누가복음"),
            ("요", "요한복음"),
            ("롬", "로마서"),
        ])
    }
}

impl BookNames {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            names: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn full_name<'a>(&'a self, abbrev: &'a str) -> &'a str {
        self.names.get(abbrev).map(String::as_str).unwrap_or(abbrev)
    }
}

/// `"<FullBookName> <chapter> <verse>"`.
pub fn format_citation(names: &BookNames, book: &str, chapter: u32, verse: u32) -> String {
    format!("{} {chapter} {verse}", names.full_name(book))
}

#[cfg(test)]
#[path = "../../tests/unit/text/citation.rs"]
mod tests;
