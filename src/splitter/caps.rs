//! Where may a word be capitalized by convention rather than by nature?
//! The stock rule set is English-centric (sentence start, after a period or
//! colon, after a bullet, after a quote), so it is data, not code.

use super::Tokenizer;
use crate::dict::Dictionary;
use crate::lattice::Sentence;

/// The positions that admit conventional capitalization.
#[derive(Debug, Clone)]
pub struct CapitalizationRules {
    /// The first non-wall word of the sentence.
    pub sentence_start: bool,
    /// Words following a slot whose first alternative is one of these
    /// (think "VII. Ancient Rome", or a heading ending in a colon).
    pub openers: Vec<String>,
    /// Words following a bullet character.
    pub after_bullet: bool,
    /// Words right after a discarded quote mark.
    pub after_quote: bool,
}

impl Default for CapitalizationRules {
    fn default() -> Self {
        Self {
            sentence_start: true,
            openers: vec![".".into(), ":".into()],
            after_bullet: true,
            after_quote: true,
        }
    }
}

impl<D: Dictionary> Tokenizer<'_, D> {
    /// Might the word at `pos` be capitalized by convention only? `pos` may
    /// be one past the end while the driver stages the next token group.
    pub(crate) fn is_capitalizable(&self, sent: &Sentence<D::Exp>, pos: usize) -> bool {
        let first_word = usize::from(self.dict.left_wall().is_some());
        if self.caps.sentence_start && pos == first_word {
            return true;
        }

        if pos > 0 {
            if let Some(prev) = sent.words.get(pos - 1).and_then(|w| w.alternatives.first()) {
                if self.caps.openers.iter().any(|opener| opener.as_str() == &**prev) {
                    return true;
                }
                if self.caps.after_bullet && self.affixes.is_bullet_str(prev) {
                    return true;
                }
            }
        }

        if self.caps.after_quote && pos < sent.len() && sent.words[pos].post_quote {
            return true;
        }

        false
    }
}
