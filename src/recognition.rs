//! Boundary with the OCR engine.
//!
//! Engines report text as blocks of lines of elements, where an element is
//! roughly one word. Elements may come back without geometry; those cannot be
//! tapped and are dropped when a pass is flattened into a [`WordCollection`].

use std::fmt::Debug;

use geo::Coord;
use thiserror::Error;
use tracing::instrument;

use crate::{util::to_geo_poly, RecognizedWord, WordCollection};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecognitionError {
    #[error("word box needs at least 3 corner points, got {0}")]
    TooFewCorners(usize),
    #[error("word box corner {index} is not finite: ({x}, {y})")]
    NonFiniteCorner { index: usize, x: f32, y: f32 },
}

/// Raw output of one OCR pass over a captured page or camera frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognizedText {
    pub text: String,
    pub blocks: Vec<TextBlock>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLine {
    pub elements: Vec<TextElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    pub corner_points: Option<Vec<Coord<f32>>>,
}

impl TextElement {
    pub fn new(
        text: impl Into<String>,
        corner_points: impl IntoIterator<Item = (f32, f32)>,
    ) -> Self {
        Self {
            text: text.into(),
            corner_points: Some(
                corner_points
                    .into_iter()
                    .map(|(x, y)| Coord { x, y })
                    .collect(),
            ),
        }
    }

    pub fn without_geometry(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            corner_points: None,
        }
    }
}

impl RecognizedText {
    /// Every element in reading order: block by block, line by line.
    pub fn elements(&self) -> impl Iterator<Item = &TextElement> {
        self.blocks
            .iter()
            .flat_map(|block| block.lines.iter())
            .flat_map(|line| line.elements.iter())
    }

    /// Flattens the pass into words tagged with `page`.
    ///
    /// Elements without usable corner points are skipped.
    #[instrument(level = "debug", skip(self), fields(blocks = self.blocks.len()))]
    pub fn into_words<P: Clone + Debug>(self, page: P) -> WordCollection<P> {
        let RecognizedText { text, blocks } = self;
        let mut skipped = 0usize;
        let words = blocks
            .into_iter()
            .flat_map(|block| block.lines)
            .flat_map(|line| line.elements)
            .filter_map(|element| {
                let Some(corners) = element.corner_points else {
                    log::debug!("Skipping {:?}, no corner points", element.text);
                    skipped += 1;
                    return None;
                };
                match RecognizedWord::try_new(page.clone(), element.text, &corners) {
                    Ok(word) => Some(word),
                    Err(err) => {
                        log::warn!("Skipping malformed word box: {err}");
                        skipped += 1;
                        None
                    }
                }
            })
            .collect::<Vec<_>>();
        log::debug!(
            "Recognized {} words on {page:?}, skipped {skipped}",
            words.len()
        );
        WordCollection::new(words, text)
    }
}

impl<P> RecognizedWord<P> {
    /// Builds a word from engine corner points, rejecting boxes that can't be hit tested.
    pub fn try_new(
        page: P,
        text: impl Into<String>,
        corners: &[Coord<f32>],
    ) -> Result<Self, RecognitionError> {
        if corners.len() < 3 {
            return Err(RecognitionError::TooFewCorners(corners.len()));
        }
        if let Some((index, corner)) = corners
            .iter()
            .enumerate()
            .find(|(_, corner)| !corner.x.is_finite() || !corner.y.is_finite())
        {
            return Err(RecognitionError::NonFiniteCorner {
                index,
                x: corner.x,
                y: corner.y,
            });
        }
        Ok(Self::new(page, text, to_geo_poly(corners)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(x: f32, y: f32, w: f32, h: f32) -> Vec<(f32, f32)> {
        vec![(x, y), (x + w, y), (x + w, y + h), (x, y + h)]
    }

    fn sample() -> RecognizedText {
        RecognizedText {
            text: "Hello, world.\nSecond line".into(),
            blocks: vec![
                TextBlock {
                    lines: vec![TextLine {
                        elements: vec![
                            TextElement::new("Hello,", quad(0.0, 0.0, 40.0, 12.0)),
                            TextElement::new("world.", quad(45.0, 0.0, 40.0, 12.0)),
                        ],
                    }],
                },
                TextBlock {
                    lines: vec![TextLine {
                        elements: vec![
                            TextElement::without_geometry("Second"),
                            TextElement::new("line", quad(50.0, 20.0, 30.0, 12.0)),
                        ],
                    }],
                },
            ],
        }
    }

    #[test]
    fn elements_in_reading_order() {
        let sample = sample();
        let texts = sample.elements().map(|it| it.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, ["Hello,", "world.", "Second", "line"]);
    }

    #[test]
    fn flattening_tags_page_and_skips_missing_geometry() {
        let _ = env_logger::builder().is_test(true).try_init();

        let words = sample().into_words(7u32);
        assert_eq!(words.len(), 3);
        assert!(words.iter().all(|word| word.page == 7));
        let texts = words.iter().map(|it| it.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, ["Hello,", "world.", "line"]);
        assert_eq!(words.full_text(), "Hello, world.\nSecond line");
    }

    #[test]
    fn malformed_boxes_are_dropped() {
        let _ = env_logger::builder().is_test(true).try_init();

        let text = RecognizedText {
            text: "a b c".into(),
            blocks: vec![TextBlock {
                lines: vec![TextLine {
                    elements: vec![
                        TextElement::new("a", [(0.0, 0.0), (1.0, 1.0)]),
                        TextElement::new("b", [(0.0, 0.0), (f32::NAN, 0.0), (1.0, 1.0)]),
                        TextElement::new("c", quad(0.0, 0.0, 5.0, 5.0)),
                    ],
                }],
            }],
        };
        let words = text.into_words("frame");
        let texts = words.iter().map(|it| it.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, ["c"]);
    }

    #[test]
    fn empty_pass() {
        let words = RecognizedText::default().into_words(1u32);
        assert!(words.is_empty());
        assert_eq!(words.full_text(), "");
    }

    #[test]
    fn try_new_validation() {
        fn corners(points: &[(f32, f32)]) -> Vec<Coord<f32>> {
            points.iter().map(|&(x, y)| Coord { x, y }).collect()
        }

        assert_eq!(
            RecognizedWord::try_new(0u32, "x", &[]),
            Err(RecognitionError::TooFewCorners(0))
        );
        assert_eq!(
            RecognizedWord::try_new(0u32, "x", &corners(&[(0.0, 0.0), (1.0, 0.0)])),
            Err(RecognitionError::TooFewCorners(2))
        );
        let spiked = corners(&[(0.0, 0.0), (1.0, f32::INFINITY), (1.0, 1.0)]);
        let err = RecognizedWord::try_new(0u32, "x", &spiked).unwrap_err();
        assert!(matches!(err, RecognitionError::NonFiniteCorner { index: 1, .. }));
        assert_eq!(err.to_string(), "word box corner 1 is not finite: (1, inf)");

        let square = corners(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let word = RecognizedWord::try_new(0u32, "x", &square).expect("valid box");
        assert!(word.contains(Coord { x: 2.0, y: 2.0 }));
        assert!(!word.contains(Coord { x: 6.0, y: 2.0 }));
    }
}
