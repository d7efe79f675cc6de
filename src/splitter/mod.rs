//! The sentence driver: scans the input into raw tokens on whitespace and
//! discarded quote marks, and runs each token through the strip → split →
//! spell pipeline, committing one balanced token group per raw token.

mod caps;
mod morph;
mod spell;
mod strip;

use std::collections::HashSet;

use tracing::debug;

pub use self::caps::CapitalizationRules;
use crate::affix::AffixTable;
use crate::dict::{find_word_in_dict, Dictionary, SpellChecker};
use crate::intern::StringPool;
use crate::lattice::{PendingGroup, Sentence};
use crate::{chars, TokenizeError, MAX_STRIP, MAX_WORD};

/// Feature switches and named debug toggles.
#[derive(Debug, Clone)]
pub struct TokenizerOptions {
    /// Ask the spell checker about unrecognized words (needs a speller).
    pub use_spell_guess: bool,
    /// Show the matched regex class name inside `[!...]` origin tags.
    pub display_morphology: bool,
    /// Fall back to the dictionary's unknown-word entry when building
    /// expressions for otherwise unrecognized alternatives.
    pub use_unknown_word: bool,
    /// Named debug toggles (`no-suffixes`, `parallel-regex`).
    pub toggles: HashSet<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            use_spell_guess: false,
            display_morphology: false,
            use_unknown_word: true,
            toggles: HashSet::new(),
        }
    }
}

impl TokenizerOptions {
    /// Turn on a named debug toggle (`no-suffixes`, `parallel-regex`).
    pub fn enable_test(&mut self, name: impl Into<String>) {
        self.toggles.insert(name.into());
    }

    pub fn test_enabled(&self, name: &str) -> bool {
        self.toggles.contains(name)
    }

    /// Both spellings of the toggle are accepted.
    pub(crate) fn parallel_regex(&self) -> bool {
        self.test_enabled("parallel-regex") || self.test_enabled("parallels-regex")
    }
}

/// Splits raw sentences against one dictionary, affix table, and option set.
/// The tokenizer is read-only across sentences except for its string pool.
pub struct Tokenizer<'a, D: Dictionary> {
    pub(crate) dict: &'a D,
    pub(crate) affixes: &'a AffixTable,
    pub(crate) speller: Option<&'a dyn SpellChecker>,
    pub(crate) caps: CapitalizationRules,
    pub(crate) opts: TokenizerOptions,
    pub(crate) pool: StringPool,
}

impl<'a, D: Dictionary> Tokenizer<'a, D> {
    pub fn new(dict: &'a D, affixes: &'a AffixTable) -> Self {
        Self {
            dict,
            affixes,
            speller: None,
            caps: CapitalizationRules::default(),
            opts: TokenizerOptions::default(),
            pool: StringPool::new(),
        }
    }

    pub fn with_options(mut self, opts: TokenizerOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn with_speller(mut self, speller: &'a dyn SpellChecker) -> Self {
        self.speller = Some(speller);
        self
    }

    pub fn with_capitalization(mut self, rules: CapitalizationRules) -> Self {
        self.caps = rules;
        self
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.opts
    }

    pub fn string_pool(&self) -> &StringPool {
        &self.pool
    }

    /// Tokenize one sentence. Whitespace separates tokens; quote characters
    /// separate tokens too and are discarded, marking the following token as
    /// post-quote. Walls are issued when the dictionary defines them.
    pub fn tokenize(&self, input: &str) -> Sentence<D::Exp> {
        let mut sent = Sentence::new();

        if let Some(wall) = self.dict.left_wall() {
            self.issue_sentence_word(&mut sent, wall, false);
        }

        let mut pos = 0;
        while pos < input.len() {
            let mut quote_found = false;
            let mut start = pos;
            for ch in input[pos..].chars() {
                if self.affixes.is_quote(ch) {
                    quote_found = true;
                } else if !chars::is_space(ch) {
                    break;
                }
                start += ch.len_utf8();
            }
            if start >= input.len() {
                break;
            }

            let mut end = start;
            for ch in input[start..].chars() {
                if chars::is_space(ch) || self.affixes.is_quote(ch) {
                    break;
                }
                end += ch.len_utf8();
            }

            self.separate_word(&mut sent, &input[start..end], quote_found);
            pos = end;
        }

        if let Some(wall) = self.dict.right_wall() {
            self.issue_sentence_word(&mut sent, wall, false);
        }

        sent
    }

    /// Tokenize a raw byte stream, rejecting invalid UTF-8.
    pub fn tokenize_bytes(&self, input: &[u8]) -> Result<Sentence<D::Exp>, TokenizeError> {
        let text = std::str::from_utf8(input)
            .map_err(|err| TokenizeError::InvalidUtf8 { offset: err.valid_up_to() })?;
        Ok(self.tokenize(text))
    }

    /// Split one raw token if necessary and commit its alternatives. English
    /// needs most of the machinery on its own:
    ///
    /// * `86mm` → `86` + `mm` (digit-gated unit strip)
    /// * `Surprise!` → `Surprise` + `!` (right punctuation)
    /// * `you've` → `you` + `'ve` (suffix split undoing the contraction)
    fn separate_word(&self, sent: &mut Sentence<D::Exp>, raw: &str, quote_found: bool) {
        let mut pending = self.pending();
        let mut word = chars::truncate(raw, MAX_WORD);

        // Recognized as-is, literally or by regex? Then leave it intact and
        // only worry about splits and capitalization below.
        let recognized = find_word_in_dict(self.dict, word);
        debug!(word, recognized, "initial check");

        let mut r_stripped: Vec<&str> = Vec::new();
        let mut strip_overflow = false;
        if !recognized {
            let rest = self.strip_left(sent, word, quote_found);
            if rest.is_empty() {
                // the token was left punctuation through and through,
                // and has been issued piece by piece
                return;
            }

            let strip = self.strip_right(rest);
            word = &rest[..strip.end];
            r_stripped = strip.stripped;
            debug!(word, in_dict = strip.word_in_dict, "root word");

            // Hitting the cap means something like a long run of periods:
            // forget the strips and accept the token as one unknown word.
            if r_stripped.len() >= MAX_STRIP {
                strip_overflow = true;
                r_stripped.clear();
                word = rest;
            }
            word = chars::truncate(word, MAX_WORD);
            debug!(word, strips = r_stripped.len(), "after punctuation/unit strip");
        }

        // From here on regex hits are handled separately: only the literal
        // dictionary decides whether the remaining core stands on its own.
        let literal = self.dict.lookup(word);
        if literal {
            debug!(word, "adding as-is, before split attempts");
            pending.push(&[], &[word], &[]);
        }

        let mut word_can_split = self.suffix_split(&mut pending, word);

        let capitalizable = self.is_capitalizable(sent, sent.len()) || quote_found;
        let mut downcased = String::new();
        if capitalizable && chars::starts_upper(word) {
            downcased = chars::downcase(word);
            word_can_split |= self.suffix_split(&mut pending, &downcased);
            debug!(lc = %downcased, "tried lower-case split");
        }

        word_can_split |= self.mprefix_split(&mut pending, word);

        let mut recognized = literal || word_can_split || strip_overflow;

        // A capitalized word gets its upper-case form only when a regex will
        // have to interpret it, and additionally its lower-case form when
        // the position admits capitalization by convention.
        if chars::starts_upper(word) {
            if !word_can_split && self.dict.match_regex(word).is_some() {
                debug!(word, "adding upper-case regex candidate");
                pending.push(&[], &[word], &[]);
            }
            if capitalizable {
                if downcased.is_empty() {
                    downcased = chars::downcase(word);
                }
                if self.dict.lookup(&downcased) {
                    debug!(lc = %downcased, "adding lower-case form");
                    pending.push(&[], &[downcased.as_str()], &[]);
                    recognized = true;
                }
            }
        }

        // Regex classification of whatever is still unrecognized. Under the
        // parallel-regex toggle it runs even for dictionary words, on the
        // down-cased form, and the alternative is tagged as regex-only.
        let parallel = self.opts.parallel_regex();
        if !recognized || parallel {
            let candidate: &str = if parallel && !downcased.is_empty() { &downcased } else { word };
            if self.dict.match_regex(candidate).is_some() {
                debug!(candidate, "adding regex alternative");
                if parallel {
                    let tagged = format!("{}[!]", chars::truncate(candidate, MAX_WORD - 3));
                    pending.push(&[], &[tagged.as_str()], &[]);
                } else {
                    pending.push(&[], &[candidate], &[]);
                }
                recognized = true;
            }
        }

        // A still-unrecognized word might be a run-on or a misspelling; the
        // spell expander commits the group itself on success. Words that
        // look like proper names are left alone.
        let mut issued = false;
        if !recognized && !chars::starts_upper(word) && self.opts.use_spell_guess {
            if let Some(speller) = self.speller {
                issued = self.guess_misspelled_word(sent, &mut pending, speller, word, quote_found);
                debug!(word, issued, "spell expansion");
            }
        }

        if !issued {
            issued = pending.commit(sent, word, quote_found);
        }
        if !issued {
            // nothing was staged at all: accept the core as one unknown word
            self.issue_sentence_word(sent, word, quote_found);
        }

        // Stripped pieces follow the core, restored to textual order.
        for piece in r_stripped.iter().rev() {
            self.issue_sentence_word(sent, piece, false);
        }
    }

    /// A fresh staging group wired to this tokenizer's pool and affix marks.
    pub(crate) fn pending(&self) -> PendingGroup<'_> {
        PendingGroup::new(
            &self.pool,
            self.pool.intern(self.dict.empty_word()),
            self.affixes.infix_mark(),
            !self.opts.test_enabled("no-suffixes"),
        )
    }

    /// Record `s` as the next word of the sentence, as its own single-slot
    /// committed group.
    pub(crate) fn issue_sentence_word(&self, sent: &mut Sentence<D::Exp>, s: &str, quote_found: bool) {
        let mut group = self.pending();
        group.push(&[], &[s], &[]);
        group.commit(sent, s, quote_found);
    }
}

#[cfg(test)]
pub(crate) mod testkit {
    use std::collections::HashSet;

    use crate::classify::RegexClassifier;
    use crate::dict::{Dictionary, SpellChecker, XNode};

    /// A dictionary over a word list and a couple of regex classes, enough
    /// to drive the splitter in unit tests.
    #[derive(Default)]
    pub struct MiniDict {
        pub words: HashSet<String>,
        pub regexes: RegexClassifier,
        pub left_wall: Option<String>,
        pub right_wall: Option<String>,
        pub unknown: Option<String>,
    }

    impl MiniDict {
        pub fn with_words(words: &[&str]) -> Self {
            Self { words: words.iter().map(|w| w.to_string()).collect(), ..Self::default() }
        }

        pub fn with_numbers(mut self) -> Self {
            self.regexes.push("NUMBERS", r"^[0-9][0-9,.:]*$").unwrap();
            self
        }
    }

    impl Dictionary for MiniDict {
        type Exp = ();

        fn lookup(&self, word: &str) -> bool {
            self.words.contains(word)
        }

        fn match_regex(&self, word: &str) -> Option<&str> {
            self.regexes.classify(word)
        }

        fn expressions(&self, entry: &str) -> Vec<XNode<()>> {
            vec![XNode::new(entry, ())]
        }

        fn left_wall(&self) -> Option<&str> {
            self.left_wall.as_deref()
        }

        fn right_wall(&self) -> Option<&str> {
            self.right_wall.as_deref()
        }

        fn unknown_word(&self) -> Option<&str> {
            self.unknown.as_deref()
        }
    }

    /// A canned spell oracle.
    pub struct MiniSpeller {
        pub known: HashSet<String>,
        pub suggestions: Vec<String>,
    }

    impl SpellChecker for MiniSpeller {
        fn test(&self, word: &str) -> bool {
            self.known.contains(word)
        }

        fn suggest(&self, _word: &str) -> Vec<String> {
            self.suggestions.clone()
        }
    }
}
