//! The staging buffer for one raw token's alternatives. Decompositions are
//! pushed while a token is being analyzed; slots grow to fit the widest
//! decomposition seen, shorter ones are padded with the empty-word filler,
//! and `commit` publishes the whole balanced group onto the sentence at
//! once. A group that stays empty commits to nothing.

use std::mem;
use std::sync::Arc;

use tracing::debug;

use super::{Sentence, WordSlot};
use crate::chars;
use crate::intern::StringPool;
use crate::MAX_WORD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Prefix,
    Stem,
    Suffix,
}

pub(crate) struct PendingGroup<'p> {
    pool: &'p StringPool,
    empty_word: Arc<str>,
    infix_mark: Option<char>,
    mark_suffixes: bool,
    slots: Vec<Vec<Arc<str>>>,
    firstupper: bool,
}

impl<'p> PendingGroup<'p> {
    pub fn new(
        pool: &'p StringPool,
        empty_word: Arc<str>,
        infix_mark: Option<char>,
        mark_suffixes: bool,
    ) -> Self {
        Self { pool, empty_word, infix_mark, mark_suffixes, slots: Vec::new(), firstupper: false }
    }

    /// Stage one decomposition: `prefixes`, then `stems`, then `suffixes`,
    /// one slot per component. Prefix components are marked with a trailing
    /// infix mark, suffix components with a leading one (unless the suffix
    /// starts with a non-letter, e.g. an apostrophe, or marking is off).
    /// A decomposition whose leading component is empty is refused.
    pub fn push(&mut self, prefixes: &[&str], stems: &[&str], suffixes: &[&str]) {
        let components = prefixes
            .iter()
            .map(|c| (Role::Prefix, *c))
            .chain(stems.iter().map(|c| (Role::Stem, *c)))
            .chain(suffixes.iter().map(|c| (Role::Suffix, *c)));

        let mut ai = 0;
        for (role, component) in components {
            if ai == 0 && component.is_empty() {
                debug!(?prefixes, ?stems, ?suffixes, "refusing decomposition with empty leading component");
                return;
            }

            if ai == self.slots.len() {
                // A fresh slot must catch up with the decompositions staged
                // before this one: all of them lacked this component.
                let filler = if ai == 0 { 0 } else { self.slots[0].len() - 1 };
                self.slots.push(vec![self.empty_word.clone(); filler]);
            }

            let formatted = self.format(role, component);
            if chars::starts_upper(&formatted) {
                self.firstupper = true;
            }
            self.slots[ai].push(self.pool.intern(&formatted));
            ai += 1;
        }

        // Pad this decomposition against earlier, wider ones.
        for slot in &mut self.slots[ai..] {
            slot.push(self.empty_word.clone());
        }
    }

    fn format(&self, role: Role, component: &str) -> String {
        let text = chars::truncate(component, MAX_WORD);
        match role {
            Role::Prefix => match self.infix_mark {
                Some(mark) => format!("{text}{mark}"),
                None => text.to_owned(),
            },
            // Stems arrive subscripted already, when subscripts apply.
            Role::Stem => text.to_owned(),
            // A suffix opening with a non-letter (an apostrophe, usually)
            // stays verbatim; an empty suffix becomes the bare mark.
            Role::Suffix => match self.infix_mark {
                Some(mark) if self.mark_suffixes && (text.is_empty() || chars::starts_alphabetic(text)) => {
                    format!("{mark}{text}")
                }
                _ => text.to_owned(),
            },
        }
    }

    /// Publish the staged group onto the sentence, recording `raw` as the
    /// group's unsplit word and `quote_found` on its first slot, then reset
    /// the stage. Returns false (and changes nothing) on an empty stage.
    pub fn commit<E>(&mut self, sent: &mut Sentence<E>, raw: &str, quote_found: bool) -> bool {
        if self.slots.is_empty() {
            return false;
        }
        let slots = mem::take(&mut self.slots);
        let firstupper = mem::take(&mut self.firstupper);

        let mut first = true;
        for alternatives in slots {
            sent.words.push(WordSlot {
                alternatives,
                unsplit_word: first.then(|| self.pool.intern(raw)),
                firstupper: first && firstupper,
                post_quote: first && quote_found,
                x: Vec::new(),
            });
            first = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(pool: &StringPool) -> PendingGroup<'_> {
        PendingGroup::new(pool, pool.intern("=.zzz"), Some('='), true)
    }

    fn staged(g: &PendingGroup) -> Vec<Vec<String>> {
        g.slots.iter().map(|s| s.iter().map(|a| a.to_string()).collect()).collect()
    }

    #[test]
    fn single_word() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        g.push(&[], &["dog"], &[]);
        assert_eq!(staged(&g), [["dog"]]);
    }

    #[test]
    fn roles_are_marked() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        g.push(&["un"], &["do"], &["ing"]);
        assert_eq!(staged(&g), [["un="], ["do"], ["=ing"]]);
    }

    #[test]
    fn apostrophe_suffix_stays_verbatim() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        g.push(&[], &["you"], &["'ve"]);
        assert_eq!(staged(&g), [["you"], ["'ve"]]);
    }

    #[test]
    fn suffix_marking_disabled() {
        let pool = StringPool::new();
        let mut g = PendingGroup::new(&pool, pool.intern("=.zzz"), Some('='), false);
        g.push(&[], &["walk"], &["ed"]);
        assert_eq!(staged(&g), [["walk"], ["ed"]]);
    }

    #[test]
    fn wider_then_narrower_balances() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        g.push(&[], &["walking"], &[]);
        g.push(&[], &["walk"], &["ing"]);
        // the one-slot decomposition gets padded on the new second slot
        assert_eq!(staged(&g), [vec!["walking", "walk"], vec!["=.zzz", "=ing"]]);
    }

    #[test]
    fn narrower_then_wider_balances() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        g.push(&[], &["walk"], &["ing"]);
        g.push(&[], &["walking"], &[]);
        assert_eq!(staged(&g), [vec!["walk", "walking"], vec!["=ing", "=.zzz"]]);
    }

    #[test]
    fn empty_leading_component_refused() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        g.push(&[], &[""], &["ing"]);
        assert!(g.slots.is_empty());
    }

    #[test]
    fn commit_empty_group_is_noop() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        let mut sent: Sentence<()> = Sentence::new();
        assert!(!g.commit(&mut sent, "word", false));
        assert!(sent.is_empty());
    }

    #[test]
    fn commit_sets_group_metadata() {
        let pool = StringPool::new();
        let mut g = group(&pool);
        let mut sent: Sentence<()> = Sentence::new();
        g.push(&[], &["Walk"], &["ing"]);
        assert!(g.commit(&mut sent, "Walking", true));

        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].unsplit_word(), Some("Walking"));
        assert!(sent[0].firstupper());
        assert!(sent[0].post_quote());
        assert_eq!(sent[1].unsplit_word(), None);
        assert!(!sent[1].firstupper());
        assert!(!sent[1].post_quote());

        // the stage is reusable afterwards
        assert!(g.slots.is_empty());
        assert!(!g.commit(&mut sent, "next", false));
    }
}
