//! Morphological splitting: suffix / prefix / multi-prefix decomposition of
//! a single token, every candidate vetted against the dictionary before it
//! is staged. A successful split does not promise the word parses; it only
//! means the parts are individually known.

use tracing::debug;

use super::Tokenizer;
use crate::affix::AffixClass;
use crate::chars;
use crate::dict::{find_word_in_dict, Dictionary};
use crate::lattice::PendingGroup;
use crate::{MAX_PREFIX_SUBWORDS, MAX_WORD};

impl<D: Dictionary> Tokenizer<'_, D> {
    /// Split the word into (prefix +) stem + suffix, staging an alternative
    /// for every combination the dictionary confirms. Contractions split
    /// here too (`he's` → `he` + `'s`). Returns true if anything was staged
    /// as a genuine morpheme split.
    pub(crate) fn suffix_split(&self, pending: &mut PendingGroup<'_>, word: &str) -> bool {
        let prefixes = self.affixes.class(AffixClass::Pre);
        let suffixes = self.affixes.class(AffixClass::Suf);
        let mut word_can_split = false;

        // Each suffix in turn, then one final no-suffix round that looks for
        // prefixes standing alone in front of a dictionary word.
        for suffix in suffixes.iter().map(|s| Some(s.as_str())).chain([None]) {
            let suffix_len = suffix.map_or(0, str::len);
            if let Some(suffix) = suffix {
                if word.len() < suffix_len {
                    // word too short for this suffix, or for any prefix
                    // combined with it
                    continue;
                }
                // An empty suffix entry always matches; some languages give
                // the bare stem a real morphological linkage that way.
                if word.ends_with(suffix) {
                    let stem = &word[..word.len() - suffix_len];
                    // The remainder of a contraction may be recognized by
                    // regex (`1960's`), so whole-word recognition applies.
                    if find_word_in_dict(self.dict, chars::truncate(stem, MAX_WORD)) {
                        word_can_split |=
                            self.add_alternative_with_subscript(pending, None, stem, Some(suffix));
                    }
                }
            }

            for prefix in prefixes {
                let Some(rest) = word.strip_prefix(prefix.as_str()) else { continue };
                let Some(middle) = rest.get(..rest.len().saturating_sub(suffix_len)) else { continue };
                if middle.is_empty() {
                    continue;
                }
                // stems behind a prefix are vetted literally, never by regex
                if self.dict.lookup(chars::truncate(middle, MAX_WORD)) {
                    word_can_split |=
                        self.add_alternative_with_subscript(pending, Some(prefix), middle, suffix);
                }
            }
        }

        word_can_split
    }

    /// Stage one prefix/stem/suffix decomposition. When the affix table
    /// defines stem subscripts, each subscripted form of the stem is vetted
    /// with a literal lookup and staged on success; otherwise the bare stem
    /// goes through as-is.
    fn add_alternative_with_subscript(
        &self,
        pending: &mut PendingGroup<'_>,
        prefix: Option<&str>,
        stem: &str,
        suffix: Option<&str>,
    ) -> bool {
        let subscripts = self.affixes.class(AffixClass::StemSubscr);
        let pre: &[&str] = match &prefix {
            Some(p) => std::slice::from_ref(p),
            None => &[],
        };
        let suf: &[&str] = match &suffix {
            Some(s) => std::slice::from_ref(s),
            None => &[],
        };

        if subscripts.is_empty() {
            debug!(?prefix, stem, ?suffix, "staging split");
            pending.push(pre, &[stem], suf);
            // Without an infix mark this was no morpheme split, and the word
            // does not count as recognized; it may still match a regex later
            // (think `1960's` → `1960` + `'s`).
            return self.affixes.infix_mark().is_some();
        }

        let mut in_dict = false;
        let base = chars::truncate(stem, MAX_WORD);
        for subscript in subscripts {
            let subscripted = format!("{base}{subscript}");
            if self.dict.lookup(&subscripted) {
                debug!(?prefix, stem = %subscripted, ?suffix, "staging subscripted split");
                pending.push(pre, &[subscripted.as_str()], suf);
                in_dict = true;
            }
        }
        in_dict
    }

    /// Peel multi-prefix subwords off the left of an agglutinated word, in
    /// all the ways the affix table admits, staging an alternative for every
    /// peel whose residue the dictionary confirms. Subwords are unique
    /// within one split; longer subwords win because `Mpre` is sorted by
    /// descending length. The table's gating properties apply: some
    /// subwords are legal only in first position, and a residue led by a
    /// doubled "leading" subword sheds one copy before lookup (while a
    /// single copy there stops the split altogether).
    pub(crate) fn mprefix_split(&self, pending: &mut PendingGroup<'_>, word: &str) -> bool {
        let mpre = self.affixes.class(AffixClass::Mpre);
        if mpre.is_empty() {
            return false;
        }

        let mut seen = vec![false; mpre.len()];
        let mut stack: Vec<&str> = Vec::new();
        let mut word_is_in_dict = false;
        let mut w = word;

        'peel: loop {
            for (i, entry) in mpre.iter().enumerate() {
                if seen[i] {
                    continue;
                }
                let entry = entry.as_str();
                if !stack.is_empty()
                    && self.affixes.first_position_only().iter().any(|f| f == entry)
                {
                    continue;
                }
                let Some(mut residue) = w.strip_prefix(entry) else { continue };

                if let Some(lead) = self
                    .affixes
                    .double_leading()
                    .iter()
                    .find(|lead| lead.as_str() != entry && residue.starts_with(lead.as_str()))
                {
                    if !residue[lead.len()..].starts_with(lead.as_str()) {
                        // a single leading copy belongs to the word itself
                        break 'peel;
                    }
                    residue = &residue[lead.len()..];
                }

                seen[i] = true;
                stack.push(entry);

                if residue.is_empty() {
                    // the whole token is prefixes; if the prefix is also a
                    // word of its own, the driver stages that separately
                    word_is_in_dict = true;
                    debug!(word, "whole-word prefix");
                    pending.push(&stack, &[], &[]);
                    break 'peel;
                }
                if find_word_in_dict(self.dict, residue) {
                    word_is_in_dict = true;
                    debug!(prefixes = ?stack, residue, "splitting off prefixes");
                    pending.push(&stack, &[residue], &[]);
                }

                w = residue;
                if stack.len() >= MAX_PREFIX_SUBWORDS {
                    break 'peel;
                }
                continue 'peel;
            }
            break;
        }

        word_is_in_dict
    }
}
