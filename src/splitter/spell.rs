//! The spell expander. An unrecognized word may be a run-on of two or more
//! words, or a misspelling of a word the dictionary does know; the external
//! spell oracle proposes both kinds.

use itertools::Itertools;
use tracing::debug;

use super::Tokenizer;
use crate::chars;
use crate::dict::{Dictionary, SpellChecker};
use crate::lattice::{PendingGroup, Sentence};
use crate::{MAX_SPELL_GUESSES, MAX_WORD};

impl<D: Dictionary> Tokenizer<'_, D> {
    /// Expand an unrecognized word through the spell oracle. Suggestions
    /// containing a space become one multi-slot run-on decomposition each;
    /// single-word suggestions the dictionary confirms become `[~]`-tagged
    /// guess alternatives. On any hit the whole token group is committed
    /// here and true is returned.
    pub(crate) fn guess_misspelled_word(
        &self,
        sent: &mut Sentence<D::Exp>,
        pending: &mut PendingGroup<'_>,
        speller: &dyn SpellChecker,
        word: &str,
        quote_found: bool,
    ) -> bool {
        // the oracle happily "corrects" numbers; veto that
        if chars::is_number(word) {
            return false;
        }
        // The spell checker knows the word even though the dictionary does
        // not: accept it as-is rather than inventing corrections.
        if speller.test(word) {
            return false;
        }

        let suggestions = speller.suggest(word);
        debug!(word, suggestions = %suggestions.iter().join(", "), "spell suggestions");

        let mut num_guesses = 0;
        for suggestion in &suggestions {
            if suggestion.contains(' ') {
                // a run-on of two or more words; one balanced slot each
                let pieces: Vec<&str> = suggestion.split(' ').filter(|p| !p.is_empty()).collect();
                pending.push(&[], &pieces, &[]);
                num_guesses += 1;
            } else if self.dict.lookup(suggestion) {
                // the [~] tag survives into the lattice and tells the
                // expression builder this word was guessed
                let tagged = format!("{}[~]", chars::truncate(suggestion, MAX_WORD - 3));
                pending.push(&[], &[tagged.as_str()], &[]);
                num_guesses += 1;
            }
            if num_guesses > MAX_SPELL_GUESSES {
                break;
            }
        }

        num_guesses > 0 && pending.commit(sent, word, quote_found)
    }
}
