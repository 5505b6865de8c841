use std::fmt::Debug;

use geo::Coord;
use tracing::instrument;

pub mod geometry;
pub mod locator;
pub mod normalize;
pub mod recognition;
mod result;
pub mod util;

pub use geometry::{point_in_polygon, point_in_ring};
pub use locator::{find_token_at, find_word_at};
pub use normalize::{normalize, TextNormalizer, DEFAULT_BLACKLIST};
pub use recognition::{RecognitionError, RecognizedText, TextBlock, TextElement, TextLine};
pub use result::*;
pub use util::Scale;

pub use geo;

#[derive(Debug, Clone, Default)]
pub struct TapResolverBuilder {
    blacklist: Option<Vec<char>>,
    options: LookupOptions,
}

impl TapResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters stripped from tapped words before they are shown.
    pub fn blacklist(mut self, blacklist: impl IntoIterator<Item = char>) -> Self {
        self.blacklist = Some(blacklist.into_iter().collect());
        self
    }

    pub fn skip_blank_tokens(mut self, skip: bool) -> Self {
        self.options.skip_blank_tokens = skip;
        self
    }

    pub fn options(mut self, options: LookupOptions) -> Self {
        self.options = options;
        self
    }

    #[instrument(skip(self), level = "debug")]
    pub fn build(self) -> TapResolver {
        let normalizer = self
            .blacklist
            .map(TextNormalizer::new)
            .unwrap_or_default();
        log::debug!(
            "Resolving taps with blacklist {:?}, {:?}",
            normalizer.blacklist(),
            self.options
        );
        TapResolver {
            normalizer,
            options: self.options,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Report a word whose normalized text is empty as a miss.
    pub skip_blank_tokens: bool,
}

/// Turns a tap into the word under it, ready for the translation popup.
#[derive(Debug, Clone, Default)]
pub struct TapResolver {
    normalizer: TextNormalizer,
    options: LookupOptions,
}

impl TapResolver {
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn options(&self) -> LookupOptions {
        self.options
    }

    /// Resolves a tap already in the coordinate space of the word boxes.
    #[instrument(level = "debug", skip(self, words), fields(candidates = words.len()))]
    pub fn resolve<'a, P: PartialEq + Debug>(
        &self,
        words: &'a WordCollection<P>,
        page: &P,
        point: Coord<f32>,
    ) -> TapOutcome<'a, P> {
        if words.is_empty() {
            log::debug!("No recognized words to match against");
            return TapOutcome::NothingRecognized;
        }

        let Some(mut tapped) = find_token_at(words.words(), page, point, &self.normalizer) else {
            return TapOutcome::Miss;
        };
        if tapped.is_blank() && self.options.skip_blank_tokens {
            log::debug!("Tapped word {:?} is blank once normalized", tapped.word.text);
            return TapOutcome::Miss;
        }
        tapped.context = Some(words.full_text());
        TapOutcome::Word(tapped)
    }

    /// Resolves a tap in display-layout coordinates over a captured image.
    pub fn resolve_display_tap<'a, P: PartialEq + Debug>(
        &self,
        words: &'a WordCollection<P>,
        page: &P,
        tap: Coord<f32>,
        scale: Scale,
    ) -> TapOutcome<'a, P> {
        self.resolve(words, page, scale.to_image_space(tap))
    }
}
