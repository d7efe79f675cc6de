//! Outer punctuation and unit stripping. Left punctuation comes off first
//! and is issued immediately; right punctuation and units come off a working
//! end pointer and are re-issued by the driver after the core token.

use either::Either;
use tracing::debug;

use super::Tokenizer;
use crate::affix::AffixClass;
use crate::chars;
use crate::dict::{find_word_in_dict, Dictionary};
use crate::lattice::Sentence;
use crate::{MAX_STRIP, MAX_WORD};

/// Result of a right-strip pass over one token.
pub(crate) struct RightStrip<'t> {
    /// Byte length of the remaining core.
    pub end: usize,
    /// Stripped affix-table entries, outermost (rightmost) first.
    pub stripped: Vec<&'t str>,
    /// The remaining core was recognized (literally or by regex), which is
    /// what stopped the stripping.
    pub word_in_dict: bool,
}

impl<'a, D: Dictionary> Tokenizer<'a, D> {
    /// Strip punctuation off the left edge, issuing every stripped piece as
    /// its own single-slot token. The scan restarts from the first table
    /// entry after each hit, so repeated and stacked openers all come off.
    /// May consume the whole token.
    pub(crate) fn strip_left<'w>(
        &self,
        sent: &mut Sentence<D::Exp>,
        word: &'w str,
        quote_found: bool,
    ) -> &'w str {
        let lpunc = self.affixes.class(AffixClass::Lpunc);

        let mut w = word;
        'scan: loop {
            for entry in lpunc {
                if entry.is_empty() {
                    continue;
                }
                if let Some(rest) = w.strip_prefix(entry.as_str()) {
                    debug!(w, entry = %entry, "issuing left punctuation");
                    self.issue_sentence_word(sent, entry, quote_found);
                    w = rest;
                    continue 'scan;
                }
            }
            return w;
        }
    }

    /// Strip punctuation and units off the right edge, outermost first, for
    /// at most [`MAX_STRIP`] rounds. Stripping stops early as soon as the
    /// remaining core is recognized by the dictionary.
    ///
    /// Units only ever precede the stripped tail of a token that *started*
    /// with a digit, and never come directly after another unit: a unit must
    /// sit at the right edge or follow a punctuation strip. That splits
    /// `12ft.` into `12 ft .` while leaving `Delft` alone, and lets unit and
    /// punctuation strips alternate through `12sq.ft.`.
    pub(crate) fn strip_right(&self, word: &str) -> RightStrip<'a> {
        let rpunc = self.affixes.class(AffixClass::Rpunc);
        let units = self.affixes.class(AffixClass::Units);
        let starts_with_number = chars::starts_with_digit(word);

        let mut stripped: Vec<&'a str> = Vec::new();
        let mut temp_end = word.len();
        let mut previous_is_unit = false;
        let mut word_in_dict = false;
        // Snapshot of the last state not inside a trailing unit run; unit
        // strips on a token without a leading digit are rolled back to it.
        let mut kept_end = word.len();
        let mut kept_count = 0;

        for _ in 0..MAX_STRIP {
            if temp_end == 0 {
                break;
            }
            let core = chars::truncate(&word[..temp_end], MAX_WORD);
            if find_word_in_dict(self.dict, core) {
                word_in_dict = true;
                break;
            }

            let mut progressed = false;
            let entries = rpunc.iter().map(Either::Left).chain(units.iter().map(Either::Right));
            for entry in entries {
                let (affix, is_unit) = match entry {
                    Either::Left(p) => (p.as_str(), false),
                    Either::Right(u) => (u.as_str(), true),
                };
                if is_unit && (!starts_with_number || previous_is_unit) {
                    break;
                }
                if affix.is_empty() || !word[..temp_end].ends_with(affix) {
                    continue;
                }

                debug!(suffix = affix, is_unit, "stripping from the right");
                if is_unit {
                    previous_is_unit = true;
                } else {
                    previous_is_unit = false;
                    kept_end = temp_end;
                    kept_count = stripped.len();
                }
                stripped.push(affix);
                temp_end -= affix.len();
                progressed = true;
                break;
            }
            if !progressed {
                break;
            }
        }

        if !previous_is_unit || starts_with_number {
            kept_end = temp_end;
            kept_count = stripped.len();
        }
        stripped.truncate(kept_count);

        RightStrip { end: kept_end, stripped, word_in_dict }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testkit::MiniDict;
    use super::*;
    use crate::affix::AffixTable;

    fn affixes() -> AffixTable {
        let mut table = AffixTable::new();
        table.set_class(AffixClass::Lpunc, ["(", "``", "$"]);
        table.set_class(AffixClass::Rpunc, [")", ",", ".", "!", "?"]);
        table.set_class(AffixClass::Units, ["mm", "ft", "sq"]);
        table
    }

    fn tokens<E>(sent: &Sentence<E>) -> Vec<String> {
        sent.iter().map(|w| w.alternatives()[0].to_string()).collect()
    }

    #[test]
    fn left_strip_issues_pieces() {
        let dict = MiniDict::with_words(&[]);
        let table = affixes();
        let tok = Tokenizer::new(&dict, &table);
        let mut sent = Sentence::new();
        let rest = tok.strip_left(&mut sent, "((word", false);
        assert_eq!(rest, "word");
        assert_eq!(tokens(&sent), ["(", "("]);
    }

    #[test]
    fn left_strip_may_consume_everything() {
        let dict = MiniDict::with_words(&[]);
        let table = affixes();
        let tok = Tokenizer::new(&dict, &table);
        let mut sent = Sentence::new();
        let rest = tok.strip_left(&mut sent, "$(", false);
        assert_eq!(rest, "");
        assert_eq!(tokens(&sent), ["$", "("]);
    }

    #[test]
    fn right_strip_stops_at_dictionary_word() {
        let dict = MiniDict::with_words(&["word"]);
        let table = affixes();
        let tok = Tokenizer::new(&dict, &table);
        let strip = tok.strip_right("word!)");
        assert_eq!(strip.stripped, [")", "!"]);
        assert_eq!(strip.end, "word".len());
        assert!(strip.word_in_dict);
    }

    #[test]
    fn units_need_a_leading_digit() {
        let dict = MiniDict::with_words(&[]).with_numbers();
        let table = affixes();
        let tok = Tokenizer::new(&dict, &table);

        let strip = tok.strip_right("86mm");
        assert_eq!(strip.stripped, ["mm"]);
        assert_eq!(strip.end, "86".len());
        assert!(strip.word_in_dict);

        // "Delft" must not lose its "ft"
        let strip = tok.strip_right("Delft");
        assert!(strip.stripped.is_empty());
        assert_eq!(strip.end, "Delft".len());
    }

    #[test]
    fn units_alternate_with_punctuation() {
        let dict = MiniDict::with_words(&[]).with_numbers();
        let table = affixes();
        let tok = Tokenizer::new(&dict, &table);
        let strip = tok.strip_right("12sq.ft.");
        assert_eq!(strip.stripped, [".", "ft", ".", "sq"]);
        assert_eq!(strip.end, "12".len());
    }

    #[test]
    fn consecutive_units_are_refused() {
        let dict = MiniDict::with_words(&[]).with_numbers();
        let table = affixes();
        let tok = Tokenizer::new(&dict, &table);
        let strip = tok.strip_right("12sqft.");
        // "ft" comes off after the period, then "sq" is blocked
        assert_eq!(strip.stripped, [".", "ft"]);
        assert_eq!(strip.end, "12sq".len());
    }

    #[test]
    fn strip_cap_is_enforced() {
        let dict = MiniDict::with_words(&[]);
        let table = affixes();
        let tok = Tokenizer::new(&dict, &table);
        let strip = tok.strip_right("x............");
        assert_eq!(strip.stripped.len(), MAX_STRIP);
    }
}
