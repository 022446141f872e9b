use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{StoryError, StoryResult};

/// One verse: its number and body text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Verse {
    #[serde(rename = "verse")]
    pub number: u32,
    pub text: String,
}

/// One chapter with its verses in file order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Chapter {
    #[serde(rename = "chapter")]
    pub number: u32,
    pub verses: Vec<Verse>,
}

/// One book, keyed by its abbreviation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub abbrev: String,
    pub chapters: Vec<Chapter>,
}

/// Passage corpus as an indexed books -> chapters -> verses array.
///
/// Every level is non-empty; [`Corpus::from_books`] and the loaders reject anything else,
/// so selection can index without re-checking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    books: Vec<Book>,
}

impl Corpus {
    pub fn from_books(books: Vec<Book>) -> StoryResult<Self> {
        if books.is_empty() {
            return Err(StoryError::corpus("corpus has no books"));
        }
        for book in &books {
            if book.chapters.is_empty() {
                return Err(StoryError::corpus(format!(
                    "book '{}' has no chapters",
                    book.abbrev
                )));
            }
            for chapter in &book.chapters {
                if chapter.verses.is_empty() {
                    return Err(StoryError::corpus(format!(
                        "book '{}' chapter {} has no verses",
                        book.abbrev, chapter.number
                    )));
                }
            }
        }
        Ok(Self { books })
    }

    /// Parse the on-disk JSON shape: `{ "<abbrev>": [ { "chapter", "verses": [..] } ] }`.
    pub fn from_json_str(s: &str) -> StoryResult<Self> {
        let raw: BTreeMap<String, Vec<Chapter>> =
            serde_json::from_str(s).map_err(|e| StoryError::serde(e.to_string()))?;
        let books = raw
            .into_iter()
            .map(|(abbrev, chapters)| Book { abbrev, chapters })
            .collect();
        Self::from_books(books)
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> StoryResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read corpus '{}'", path.display()))?;
        let corpus = Self::from_json_str(&s)?;
        tracing::debug!(
            books = corpus.books.len(),
            verses = corpus.verse_count(),
            "corpus loaded"
        );
        Ok(corpus)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.iter())
            .map(|c| c.verses.len())
            .sum()
    }

    /// Look up a verse by its citation triple.
    pub fn find(&self, book: &str, chapter: u32, verse: u32) -> Option<&Verse> {
        self.books
            .iter()
            .find(|b| b.abbrev == book)?
            .chapters
            .iter()
            .find(|c| c.number == chapter)?
            .verses
            .iter()
            .find(|v| v.number == verse)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/corpus/model.rs"]
mod tests;
