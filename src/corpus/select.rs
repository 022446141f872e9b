use crate::corpus::model::Corpus;
use crate::foundation::math::Rng64;

/// A single drawn passage with its citation triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passage {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Draw a book, then a chapter in it, then a verse in that chapter, each uniformly.
pub fn select_passage(corpus: &Corpus, rng: &mut Rng64) -> Passage {
    let books = corpus.books();
    let book = &books[rng.next_index(books.len())];
    let chapter = &book.chapters[rng.next_index(book.chapters.len())];
    let verse = &chapter.verses[rng.next_index(chapter.verses.len())];
    Passage {
        book: book.abbrev.clone(),
        chapter: chapter.number,
        verse: verse.number,
        text: verse.text.clone(),
    }
}

/// Owns the RNG stream used across requests.
#[derive(Debug)]
pub struct PassageSelector {
    rng: Rng64,
}

impl PassageSelector {
    pub fn new(rng: Rng64) -> Self {
        Self { rng }
    }

    pub fn from_clock() -> Self {
        Self::new(Rng64::from_clock())
    }

    pub fn select(&mut self, corpus: &Corpus) -> Passage {
        select_passage(corpus, &mut self.rng)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/corpus/select.rs"]
mod tests;
