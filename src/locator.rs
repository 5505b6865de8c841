use std::fmt::Debug;

use geo::Coord;
use tracing::instrument;

use crate::{normalize::TextNormalizer, MatchResult, RecognizedWord, TappedWord};

/// Finds the first word on `page` whose box contains `point`.
///
/// `point` must already be in the coordinate space of the word boxes.
/// Overlapping boxes resolve to the one listed first.
#[instrument(level = "trace", skip(words), fields(candidates = words.len()))]
pub fn find_word_at<'a, P: PartialEq + Debug>(
    words: &'a [RecognizedWord<P>],
    page: &P,
    point: Coord<f32>,
) -> MatchResult<'a, P> {
    let hit = words
        .iter()
        .enumerate()
        .filter(|(_, word)| word.page == *page)
        .find(|(_, word)| word.contains(point));

    match hit {
        Some((index, word)) => {
            log::trace!(
                "Tap at ({}, {}) hit word {index} {:?}",
                point.x,
                point.y,
                word.text
            );
            MatchResult::Found(word)
        }
        None => {
            log::trace!("Tap at ({}, {}) hit nothing on {page:?}", point.x, point.y);
            MatchResult::NotFound
        }
    }
}

/// [`find_word_at`] with the match already normalized.
pub fn find_token_at<'a, P: PartialEq + Debug>(
    words: &'a [RecognizedWord<P>],
    page: &P,
    point: Coord<f32>,
    normalizer: &TextNormalizer,
) -> Option<TappedWord<'a, P>> {
    find_word_at(words, page, point).normalized(normalizer)
}
