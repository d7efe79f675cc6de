//! A fixture dictionary rich enough to drive the whole pipeline: a word
//! list, regex classes, entity markers, optional walls, an unknown-word
//! entry, and canned subscripted expressions per entry.
#![allow(dead_code)] // each test binary uses its own subset

use std::collections::{HashMap, HashSet};

use lattok::{Dictionary, RegexClassifier, Sentence, SpellChecker, XNode};

#[derive(Default)]
pub struct FixtureDict {
    pub words: HashSet<String>,
    pub regexes: RegexClassifier,
    pub entities: HashSet<String>,
    pub common: HashSet<String>,
    pub left_wall: Option<String>,
    pub right_wall: Option<String>,
    pub unknown: Option<String>,
    /// Entry → subscripted expression word strings; entries absent here but
    /// present in `words` expand to themselves.
    pub entries: HashMap<String, Vec<String>>,
}

impl FixtureDict {
    pub fn with_words(words: &[&str]) -> Self {
        Self { words: words.iter().map(|w| w.to_string()).collect(), ..Self::default() }
    }

    pub fn with_numbers(mut self) -> Self {
        self.regexes.push("NUMBERS", r"^[0-9][0-9,.:]*$").unwrap();
        self
    }

    pub fn with_capitalized_words(mut self) -> Self {
        self.regexes.push("CAPITALIZED-WORDS", r"^\p{Lu}[\p{L}\p{Nd}-]*$").unwrap();
        self.words.insert("CAPITALIZED-WORDS".into());
        self
    }

    pub fn define(mut self, entry: &str, expansions: &[&str]) -> Self {
        self.words.insert(entry.to_string());
        self.entries.insert(entry.to_string(), expansions.iter().map(|e| e.to_string()).collect());
        self
    }
}

impl Dictionary for FixtureDict {
    type Exp = ();

    fn lookup(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn match_regex(&self, word: &str) -> Option<&str> {
        self.regexes.classify(word)
    }

    fn expressions(&self, entry: &str) -> Vec<XNode<()>> {
        if let Some(expansions) = self.entries.get(entry) {
            return expansions.iter().map(|word| XNode::new(word.as_str(), ())).collect();
        }
        if self.words.contains(entry) {
            return vec![XNode::new(entry, ())];
        }
        Vec::new()
    }

    fn is_entity(&self, word: &str) -> bool {
        self.entities.contains(word)
    }

    fn is_common_entity(&self, word: &str) -> bool {
        self.common.contains(word)
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

pub struct FixtureSpeller {
    pub known: HashSet<String>,
    pub suggestions: HashMap<String, Vec<String>>,
}

impl FixtureSpeller {
    pub fn suggesting(word: &str, suggestions: &[&str]) -> Self {
        Self {
            known: HashSet::new(),
            suggestions: [(word.to_string(), suggestions.iter().map(|s| s.to_string()).collect())]
                .into_iter()
                .collect(),
        }
    }
}

impl SpellChecker for FixtureSpeller {
    fn test(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions.get(word).cloned().unwrap_or_default()
    }
}

/// All alternatives per slot, as plain strings.
pub fn alts<E>(sent: &Sentence<E>) -> Vec<Vec<String>> {
    sent.iter().map(|w| w.alternatives().iter().map(|a| a.to_string()).collect()).collect()
}

/// First alternative per slot.
pub fn tokens<E>(sent: &Sentence<E>) -> Vec<String> {
    sent.iter().map(|w| w.alternatives()[0].to_string()).collect()
}

/// Every token group must be balanced: within a group all slots carry the
/// same number of alternatives, and only the first slot of a group has the
/// unsplit word recorded.
pub fn assert_balanced<E>(sent: &Sentence<E>) {
    let mut group_width = None;
    for (i, word) in sent.iter().enumerate() {
        if word.unsplit_word().is_some() {
            group_width = Some(word.alternatives().len());
        } else {
            assert!(group_width.is_some(), "slot {i} belongs to no group");
        }
        assert_eq!(
            Some(word.alternatives().len()),
            group_width,
            "slot {i} is unbalanced within its group"
        );
        assert!(!word.alternatives().is_empty(), "slot {i} has no alternatives");
        assert!(
            word.alternatives().iter().all(|a| !a.is_empty()),
            "slot {i} carries an empty alternative"
        );
    }
}
