use geo::{Coord, Polygon};

use crate::{geometry::point_in_polygon, normalize::TextNormalizer};

/// One word from an OCR pass, tagged with the page or capture it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedWord<P> {
    pub page: P,
    pub text: String,
    pub bounds: Polygon<f32>,
}

impl<P> RecognizedWord<P> {
    pub fn new(page: P, text: impl Into<String>, bounds: Polygon<f32>) -> Self {
        Self {
            page,
            text: text.into(),
            bounds,
        }
    }

    pub fn contains(&self, point: Coord<f32>) -> bool {
        point_in_polygon(point, &self.bounds)
    }
}

/// All words from a single recognition pass plus the pass's full text.
///
/// A new pass replaces the whole collection; words are never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCollection<P> {
    words: Vec<RecognizedWord<P>>,
    full_text: String,
}

impl<P> WordCollection<P> {
    pub fn new(words: Vec<RecognizedWord<P>>, full_text: impl Into<String>) -> Self {
        Self {
            words,
            full_text: full_text.into(),
        }
    }

    pub fn words(&self) -> &[RecognizedWord<P>] {
        &self.words
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecognizedWord<P>> {
        self.words.iter()
    }
}

impl<P> Default for WordCollection<P> {
    fn default() -> Self {
        Self::new(Vec::new(), String::new())
    }
}

impl<P> FromIterator<RecognizedWord<P>> for WordCollection<P> {
    fn from_iter<I: IntoIterator<Item = RecognizedWord<P>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect(), String::new())
    }
}

impl<'a, P> IntoIterator for &'a WordCollection<P> {
    type Item = &'a RecognizedWord<P>;
    type IntoIter = std::slice::Iter<'a, RecognizedWord<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult<'a, P> {
    Found(&'a RecognizedWord<P>),
    NotFound,
}

impl<'a, P> MatchResult<'a, P> {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }

    pub fn word(&self) -> Option<&'a RecognizedWord<P>> {
        match self {
            MatchResult::Found(word) => Some(*word),
            MatchResult::NotFound => None,
        }
    }

    /// Pairs the matched word with its normalized text.
    pub fn normalized(&self, normalizer: &TextNormalizer) -> Option<TappedWord<'a, P>> {
        self.word().map(|word| TappedWord {
            word,
            token: normalizer.normalize(&word.text),
            context: None,
        })
    }
}

/// A tapped word ready for display and translation.
#[derive(Debug, Clone, PartialEq)]
pub struct TappedWord<'a, P> {
    pub word: &'a RecognizedWord<P>,
    /// Normalized word text.
    pub token: String,
    /// Full text of the recognition pass the word came from, if known.
    pub context: Option<&'a str>,
}

impl<P> TappedWord<'_, P> {
    pub fn is_blank(&self) -> bool {
        self.token.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome<'a, P> {
    /// The last pass recognized no words at all.
    NothingRecognized,
    /// Words exist but none on this page contains the tap.
    Miss,
    Word(TappedWord<'a, P>),
}

impl<'a, P> TapOutcome<'a, P> {
    pub fn tapped(&self) -> Option<&TappedWord<'a, P>> {
        match self {
            TapOutcome::Word(tapped) => Some(tapped),
            _ => None,
        }
    }
}
