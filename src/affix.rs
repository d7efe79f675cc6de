//! The affix table: ordered lists of strippable and splittable strings,
//! grouped into named classes, plus the infix mark and the multi-prefix
//! gating properties. The table is language data supplied by the dictionary
//! side; the tokenizer only reads it. An empty table is valid and turns
//! every stripping and splitting step into a no-op.

use std::cmp::Reverse;

/// The affix classes a dictionary may populate.
///
/// - `Lpunc` / `Rpunc` — punctuation strippable off the left / right edge.
/// - `Units` — right-strippable unit suffixes, digit-gated (`86mm`).
/// - `Pre` / `Suf` — morphological prefixes and suffixes.
/// - `Mpre` — multi-prefix subwords for agglutinative splitting, kept
///   sorted by descending length so longer subwords match first.
/// - `StemSubscr` — subscripts appended to a stem before dictionary lookup.
/// - `Quotes` / `Bullets` — characters treated as quotation marks / bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixClass {
    Lpunc,
    Rpunc,
    Units,
    Pre,
    Suf,
    Mpre,
    StemSubscr,
    Quotes,
    Bullets,
}

#[derive(Debug, Clone, Default)]
pub struct AffixTable {
    lpunc: Vec<String>,
    rpunc: Vec<String>,
    units: Vec<String>,
    pre: Vec<String>,
    suf: Vec<String>,
    mpre: Vec<String>,
    stemsubscr: Vec<String>,
    quotes: Vec<String>,
    bullets: Vec<String>,
    infix_mark: Option<char>,
    first_position_only: Vec<String>,
    double_leading: Vec<String>,
}

impl AffixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entries of one class, in table order.
    pub fn class(&self, class: AffixClass) -> &[String] {
        match class {
            AffixClass::Lpunc => &self.lpunc,
            AffixClass::Rpunc => &self.rpunc,
            AffixClass::Units => &self.units,
            AffixClass::Pre => &self.pre,
            AffixClass::Suf => &self.suf,
            AffixClass::Mpre => &self.mpre,
            AffixClass::StemSubscr => &self.stemsubscr,
            AffixClass::Quotes => &self.quotes,
            AffixClass::Bullets => &self.bullets,
        }
    }

    /// Replace the entries of one class. `Mpre` is re-sorted by descending
    /// length; all other classes keep the given order.
    pub fn set_class<I, S>(&mut self, class: AffixClass, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        let slot = match class {
            AffixClass::Lpunc => &mut self.lpunc,
            AffixClass::Rpunc => &mut self.rpunc,
            AffixClass::Units => &mut self.units,
            AffixClass::Pre => &mut self.pre,
            AffixClass::Suf => &mut self.suf,
            AffixClass::Mpre => &mut self.mpre,
            AffixClass::StemSubscr => &mut self.stemsubscr,
            AffixClass::Quotes => &mut self.quotes,
            AffixClass::Bullets => &mut self.bullets,
        };
        *slot = entries;
        if class == AffixClass::Mpre {
            self.mpre.sort_by_key(|s| Reverse(s.chars().count()));
        }
    }

    /// The single character marking a surface form as a morphological affix
    /// rather than a whole word. `None` disables affix marking.
    pub fn infix_mark(&self) -> Option<char> {
        self.infix_mark
    }

    pub fn set_infix_mark(&mut self, mark: Option<char>) {
        self.infix_mark = mark;
    }

    /// Multi-prefix subwords that may only be peeled as the first subword.
    pub fn first_position_only(&self) -> &[String] {
        &self.first_position_only
    }

    pub fn set_first_position_only<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.first_position_only = entries.into_iter().map(Into::into).collect();
    }

    /// Multi-prefix subwords subject to the doubled-leading-character
    /// disambiguation in the residue of a peel.
    pub fn double_leading(&self) -> &[String] {
        &self.double_leading
    }

    pub fn set_double_leading<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.double_leading = entries.into_iter().map(Into::into).collect();
    }

    /// Is the character a quotation mark? Quote entries are treated as sets
    /// of characters, so both one-char entries and a single string of all
    /// quote characters work.
    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.iter().any(|entry| entry.contains(ch))
    }

    /// Is the character a bullet?
    pub fn is_bullet(&self, ch: char) -> bool {
        self.bullets.iter().any(|entry| entry.contains(ch))
    }

    /// Does the string start with a bullet character?
    pub fn is_bullet_str(&self, s: &str) -> bool {
        s.chars().next().is_some_and(|ch| self.is_bullet(ch))
    }
}
