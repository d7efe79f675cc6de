//! The expression builder: once the lattice is final, every alternative gets
//! its disjunct expressions from the dictionary, with origin tags rewritten
//! into the expression word strings — `[~]` for spell guesses, `[!name]` for
//! regex-classified words, `[?]` for unknowns — always preserving the
//! dictionary-assigned subscript. Capitalized words in capitalizable
//! positions additionally gain (or are replaced by) their lower-case
//! reading.

use std::sync::Arc;

use tracing::debug;

use crate::chars;
use crate::dict::{find_word_in_dict, Dictionary, XNode};
use crate::lattice::Sentence;
use crate::splitter::Tokenizer;
use crate::{TokenizeError, SUBSCRIPT_MARK};

impl<D: Dictionary> Tokenizer<'_, D> {
    /// Populate the expression list of every word slot, visiting the
    /// alternatives in order and concatenating their expression chains.
    ///
    /// For a capitalized word in a capitalizable position whose lower-case
    /// form is in the dictionary, the lower-case expressions are *appended*
    /// when the word classifies as an entity (or the lower-case form is a
    /// common entity word, e.g. "Great Southern Union"), and otherwise
    /// *replace* the upper-case ones — along with the lattice alternative
    /// itself, so an upper-case "She" never parses as a proper name.
    pub fn build_expressions(&self, sent: &mut Sentence<D::Exp>) {
        for i in 0..sent.len() {
            let count = sent.words[i].alternatives.len();
            let mut x: Vec<XNode<D::Exp>> = Vec::new();

            for ialt in 0..count {
                let s: Arc<str> = Arc::clone(&sent.words[i].alternatives[ialt]);
                let mut we = self.expressions_for(&s);

                if self.is_capitalizable(sent, i) && chars::starts_upper(&s) {
                    let lc = chars::downcase(&s);
                    // Plain lookup only: a regex hit on the lower-case form
                    // (plural nouns and the like) must not discard the
                    // upper-case reading.
                    if self.dict.lookup(&lc) {
                        if self.classifies_as_entity(&s) || self.dict.is_common_entity(&lc) {
                            debug!(word = %s, lc = %lc, "keeping both cases");
                            we.extend(self.dict.expressions(&lc));
                        } else {
                            debug!(word = %s, lc = %lc, "downcase only");
                            sent.words[i].alternatives[ialt] = self.pool.intern(&lc);
                            we = self.dict.expressions(&lc);
                        }
                    }
                }

                x.extend(we);
            }
            sent.words[i].x = x;
        }
    }

    /// The expression chain for one committed alternative, origin tags
    /// applied. The lookup order is: literal dictionary word, then regex
    /// class, then the unknown-word entry.
    fn expressions_for(&self, s: &str) -> Vec<XNode<D::Exp>> {
        // spell guesses carry their surface form in front of the [~] tag
        let (origword, spell_mark) = match s.find("[~") {
            Some(at) => (&s[..at], Some(&s[at..])),
            None => (s, None),
        };
        // regex-only alternatives carry the form that regex matching saw
        let (regex_form, regex_only) = match s.find("[!") {
            Some(at) => (&s[..at], true),
            None => (s, false),
        };

        if !regex_only && self.dict.lookup(origword) {
            let mut we = self.dict.expressions(origword);
            if let Some(mark) = spell_mark {
                self.mark_words(&mut we, mark);
            }
            return we;
        }

        if let Some(regex_name) = self.dict.match_regex(regex_form) {
            if self.dict.lookup(regex_name) {
                debug!(word = regex_form, class = regex_name, "regex expressions");
                let mut we = self.dict.expressions(regex_name);
                let shown = if self.opts.display_morphology { regex_name } else { "" };
                self.mark_replace_words(&mut we, regex_form, '!', shown);
                return we;
            }
        }

        if self.opts.use_unknown_word {
            if let Some(unknown) = self.dict.unknown_word() {
                let mut we = self.dict.expressions(unknown);
                assert!(!we.is_empty(), "the unknown-word entry must resolve to expressions");
                self.mark_replace_words(&mut we, s, '?', "");
                return we;
            }
        }

        panic!("no expressions for {s:?}: the tokenizer only commits recognizable alternatives");
    }

    /// Insert `mark` into each expression word, in front of the subscript:
    /// `dog.n` + `[~]` → `dog[~].n`.
    fn mark_words(&self, nodes: &mut [XNode<D::Exp>], mark: &str) {
        for node in nodes {
            let at = node.string.rfind(SUBSCRIPT_MARK).unwrap_or(node.string.len());
            let (root, subscript) = node.string.split_at(at);
            let tagged = format!("{root}{mark}{subscript}");
            node.string = self.pool.intern(&tagged);
        }
    }

    /// Replace each expression word with the surface `word` plus a bracketed
    /// origin tag, keeping the dictionary entry's subscript: the entry
    /// `they.p` matched by regex class `S-WORDS` becomes `word[!S-WORDS].p`.
    fn mark_replace_words(&self, nodes: &mut [XNode<D::Exp>], word: &str, mark: char, kind: &str) {
        for node in nodes {
            let subscript = match node.string.rfind(SUBSCRIPT_MARK) {
                Some(at) => &node.string[at..],
                None => "",
            };
            let tagged = format!("{word}[{mark}{kind}]{subscript}");
            node.string = self.pool.intern(&tagged);
        }
    }

    /// Entity check for capitalization handling: the marker on the word
    /// itself, or on the regex class the word falls into.
    fn classifies_as_entity(&self, word: &str) -> bool {
        if self.dict.is_entity(word) {
            return true;
        }
        self.dict.match_regex(word).is_some_and(|name| self.dict.is_entity(name))
    }

    /// Check every committed alternative against the dictionary, literally
    /// or by regex. The offending strings come back inside the error, ready
    /// for a "not in dictionary" diagnostic.
    pub fn sentence_in_dictionary(&self, sent: &Sentence<D::Exp>) -> Result<(), TokenizeError> {
        let mut missing: Vec<String> = Vec::new();
        for slot in sent {
            for alt in slot.alternatives() {
                if !find_word_in_dict(self.dict, alt) && !missing.iter().any(|m| m.as_str() == &**alt) {
                    missing.push(alt.to_string());
                }
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TokenizeError::WordsNotInDictionary { words: missing })
        }
    }
}
