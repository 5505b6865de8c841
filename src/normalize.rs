/// Characters OCR tends to glue onto the last word of a line.
pub const DEFAULT_BLACKLIST: &[char] = &['.', ','];

/// Strips blacklisted characters from recognized text, then trims it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNormalizer {
    blacklist: Vec<char>,
}

impl TextNormalizer {
    pub fn new(blacklist: impl IntoIterator<Item = char>) -> Self {
        Self {
            blacklist: blacklist.into_iter().collect(),
        }
    }

    pub fn blacklist(&self) -> &[char] {
        &self.blacklist
    }

    pub fn normalize(&self, text: &str) -> String {
        strip(text, &self.blacklist)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST.iter().copied())
    }
}

/// [`TextNormalizer::normalize`] with [`DEFAULT_BLACKLIST`].
pub fn normalize(text: &str) -> String {
    strip(text, DEFAULT_BLACKLIST)
}

fn strip(text: &str, blacklist: &[char]) -> String {
    let cleaned = text
        .chars()
        .filter(|c| !blacklist.contains(c))
        .collect::<String>();
    let trimmed = cleaned.trim();
    if trimmed.len() != cleaned.len() {
        log::trace!("Trimmed {cleaned:?} to {trimmed:?}");
    }
    trimmed.to_owned()
}
