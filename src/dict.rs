//! The seams to the dictionary and the spell checker. The tokenizer never
//! caches lookups: the dictionary is the single source of truth for "is this
//! a word", consulted again whenever a candidate changes.

use std::sync::Arc;

/// Conventional marker for the slot issued before the first input token.
pub const LEFT_WALL_WORD: &str = "LEFT-WALL";

/// Conventional marker for the slot issued after the last input token.
pub const RIGHT_WALL_WORD: &str = "RIGHT-WALL";

/// Default balancing filler published in place of missing decomposition
/// components. Shaped like a subscripted null affix so a parser treats it as
/// an ordinary (linkable, invisible) token.
pub const EMPTY_WORD_MARK: &str = "=.zzz";

/// One disjunct expression attached to a tokenization alternative. The
/// linkage payload `exp` belongs to the dictionary and is opaque here; the
/// tokenizer only rewrites `string` when tagging word origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XNode<E> {
    /// Dictionary entry string, subscript included (e.g. `dog.n`).
    pub string: Arc<str>,
    /// Expression payload owned by the dictionary.
    pub exp: E,
}

impl<E> XNode<E> {
    pub fn new(string: impl Into<Arc<str>>, exp: E) -> Self {
        Self { string: string.into(), exp }
    }
}

/// Word knowledge consumed during tokenization. Lookups are literal and
/// case-sensitive; regex classification is a separate oracle whose hit names
/// the matching class (itself a dictionary entry carrying the expressions
/// for such words).
pub trait Dictionary {
    /// Disjunct expression payload attached to each [`XNode`].
    type Exp: Clone;

    /// Literal, case-sensitive lookup.
    fn lookup(&self, word: &str) -> bool;

    /// Name of the first regex class matching `word`, if any.
    fn match_regex(&self, word: &str) -> Option<&str>;

    /// Disjunct expressions for a dictionary entry. Entries may expand to
    /// several subscripted forms (`dog.n`, `dog.v`), one node each.
    fn expressions(&self, entry: &str) -> Vec<XNode<Self::Exp>>;

    /// Does the word carry the entity marker (usable as a proper name part)?
    fn is_entity(&self, _word: &str) -> bool {
        false
    }

    /// Is the word a common noun or adjective eligible to appear inside an
    /// entity name ("Sun State Bank")?
    fn is_common_entity(&self, _word: &str) -> bool {
        false
    }

    /// Marker issued as the first slot, when defined.
    fn left_wall(&self) -> Option<&str> {
        None
    }

    /// Marker issued as the last slot, when defined.
    fn right_wall(&self) -> Option<&str> {
        None
    }

    /// Entry whose expressions stand in for words nothing else recognizes.
    fn unknown_word(&self) -> Option<&str> {
        None
    }

    /// The balancing filler for short decompositions.
    fn empty_word(&self) -> &str {
        EMPTY_WORD_MARK
    }
}

/// Whole-word recognition: literal lookup or regex classification. A regex
/// hit counts for whole-word identity but not when vetting a stem.
pub fn find_word_in_dict<D: Dictionary + ?Sized>(dict: &D, word: &str) -> bool {
    dict.lookup(word) || dict.match_regex(word).is_some()
}

/// External spell oracle used for run-on splits and misspelling guesses.
pub trait SpellChecker {
    /// Does the spell checker itself know this word?
    fn test(&self, word: &str) -> bool;

    /// Suggested replacements, best first. A suggestion containing spaces is
    /// a run-on split into several words.
    fn suggest(&self, word: &str) -> Vec<String>;
}
