//! A ready-made regex oracle for [`Dictionary`](crate::Dictionary)
//! implementors: an ordered list of named patterns where the first match
//! wins, mirroring how a dictionary's regex file assigns unknown tokens to
//! classes such as `NUMBERS` or `CAPITALIZED-WORDS`.

use fancy_regex::Regex;

#[derive(Debug, Default)]
pub struct RegexClassifier {
    rules: Vec<(String, Regex)>,
}

impl RegexClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named pattern. Order is significant: earlier rules shadow
    /// later ones.
    pub fn push(&mut self, name: impl Into<String>, pattern: &str) -> Result<(), fancy_regex::Error> {
        let re = Regex::new(pattern)?;
        self.rules.push((name.into(), re));
        Ok(())
    }

    /// The name of the first rule matching `word`. Patterns that error at
    /// match time (catastrophic backtracking limits) are treated as misses.
    pub fn classify(&self, word: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(_, re)| matches!(re.is_match(word), Ok(true)))
            .map(|(name, _)| name.as_str())
    }
}
