//! Emoji catalog built at runtime from the `emoji-test.txt` description
//! format: groups, subgroups, per-emoji variation links, a text lookup, and
//! generated patterns that match any emoji occurrence — including modifier
//! combinations the source never lists.

extern crate tracing as log;

use std::sync::Arc;

use arc_swap::ArcSwapOption;

mod catalog;
mod codepoint;
mod modifier;
mod parse;
mod pattern;

pub mod source;

pub use catalog::{Catalog, Emoji, Group, SubGroup};
pub use codepoint::{decode_sequence, CodepointError};
pub use modifier::{contains_modifier, ModifierKind, HAIR_STYLES, SKIN_TONES};
pub use parse::BuildError;

use parse::CatalogBuilder;
use pattern::Matchers;

/// A fully built catalog plus its compiled matchers. Immutable once built,
/// so it can be read from any number of threads.
pub struct Snapshot {
    pub(crate) catalog: Catalog,
    pub(crate) matchers: Matchers,
}

impl Snapshot {
    /// Runs the whole pipeline over a line source: parse, link, prune,
    /// compile. Nothing is published on error.
    ///
    /// `renderable` is the backend capability check; it is consulted once
    /// per constructed entity and its answer is cached on the entry. A
    /// `false` answer is a normal outcome, not a failure.
    pub fn build<I, R>(lines: I, mut renderable: R) -> Result<Snapshot, BuildError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        R: FnMut(&str) -> bool,
    {
        let mut builder = CatalogBuilder::default();

        for line in lines {
            builder.push_line(line.as_ref(), &mut renderable)?;
        }

        builder.finish()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Matches exactly one emoji occurrence.
    pub fn match_one(&self) -> &regex::Regex {
        &self.matchers.one
    }

    /// Matches one or more back-to-back emoji occurrences, no separators.
    pub fn match_multiple(&self) -> &regex::Regex {
        &self.matchers.multiple
    }

    /// Iterates every recognized emoji occurrence in `text`. Generalized
    /// matches may hit modifier combinations with no catalog entry, so
    /// resolve them through [`Snapshot::lookup`] as needed.
    pub fn scan<'r, 't>(&'r self, text: &'t str) -> regex::Matches<'r, 't> {
        self.matchers.one.find_iter(text)
    }

    pub fn lookup(&self, text: &str) -> Option<Emoji<'_>> {
        self.catalog.lookup(text)
    }
}

/// Process-wide handle to the current [`Snapshot`].
///
/// A refresh builds a complete replacement and swaps it in atomically;
/// readers holding the previous `Arc` keep a consistent view and never see a
/// half-built catalog.
#[derive(Default)]
pub struct EmojiStore(ArcSwapOption<Snapshot>);

impl EmojiStore {
    pub const fn new() -> Self {
        EmojiStore(ArcSwapOption::const_empty())
    }

    /// Rebuilds from `lines` and publishes the result. On error the
    /// previously published snapshot, if any, stays in place.
    pub fn refresh<I, R>(&self, lines: I, renderable: R) -> Result<(), BuildError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        R: FnMut(&str) -> bool,
    {
        self.0.store(Some(Arc::new(Snapshot::build(lines, renderable)?)));
        Ok(())
    }

    /// The current snapshot, or `None` before the first successful refresh.
    pub fn load(&self) -> Option<Arc<Snapshot>> {
        self.0.load_full()
    }
}
