//! A word tokenizer that splits a raw sentence into a lattice of word slots,
//! where every slot carries one or more alternative tokenizations: affix
//! strips, prefix/stem/suffix decompositions, capitalization variants, spell
//! guesses, or regex-classified unknowns. A downstream parser picks one
//! alternative per slot.
//!
//! The dictionary, the regex classifier, and the spell checker are external
//! collaborators, reached through the [`Dictionary`] and [`SpellChecker`]
//! traits. Affix knowledge (strippable punctuation, units, morphological
//! affixes, quotes, bullets) is carried by an [`AffixTable`].
//!
//! ```rust
//! use std::collections::HashSet;
//! use lattok::{AffixClass, AffixTable, Dictionary, Tokenizer, XNode};
//!
//! struct WordList(HashSet<&'static str>);
//!
//! impl Dictionary for WordList {
//!     type Exp = ();
//!     fn lookup(&self, word: &str) -> bool {
//!         self.0.contains(word)
//!     }
//!     fn match_regex(&self, _word: &str) -> Option<&str> {
//!         None
//!     }
//!     fn expressions(&self, entry: &str) -> Vec<XNode<()>> {
//!         vec![XNode::new(entry, ())]
//!     }
//! }
//!
//! let dict = WordList(["you", "surprise"].into_iter().collect());
//! let mut affixes = AffixTable::default();
//! affixes.set_class(AffixClass::Lpunc, ["("]);
//! affixes.set_class(AffixClass::Rpunc, [")", "!"]);
//! affixes.set_class(AffixClass::Suf, ["'ve"]);
//!
//! let tokenizer = Tokenizer::new(&dict, &affixes);
//! let sentence = tokenizer.tokenize("(surprise!) you've");
//!
//! let tokens: Vec<_> = sentence.iter().map(|w| w.alternatives()[0].to_string()).collect();
//! assert_eq!(tokens, ["(", "surprise", "!", ")", "you", "'ve"]);
//! ```

pub mod affix;
pub mod chars;
pub mod classify;
pub mod dict;
mod express;
pub mod intern;
pub mod lattice;
pub mod splitter;

pub use affix::{AffixClass, AffixTable};
pub use classify::RegexClassifier;
pub use dict::{find_word_in_dict, Dictionary, SpellChecker, XNode};
pub use intern::StringPool;
pub use lattice::{Sentence, WordSlot};
pub use splitter::{CapitalizationRules, Tokenizer, TokenizerOptions};

/// Tokens longer than this are truncated (in characters, not bytes).
pub const MAX_WORD: usize = 180;

/// Upper bound on right-side punctuation/unit strips per token.
pub const MAX_STRIP: usize = 10;

/// Upper bound on peeled subwords in a multi-prefix split.
pub const MAX_PREFIX_SUBWORDS: usize = 5;

/// Upper bound on accepted spell-checker suggestions per token.
pub const MAX_SPELL_GUESSES: usize = 60;

/// Separates a word root from its dictionary subscript; everything from the
/// last occurrence onward is preserved verbatim through tag rewrites.
pub const SUBSCRIPT_MARK: char = '.';

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    /// The input byte stream is not valid UTF-8.
    #[error("input is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },

    /// Committed alternatives that neither the dictionary nor the regex
    /// classifier recognize.
    #[error("the following words are not in the dictionary: {}", .words.join(" "))]
    WordsNotInDictionary { words: Vec<String> },
}
