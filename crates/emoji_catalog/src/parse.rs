//! Stateful line-oriented parser for the emoji description source.
//!
//! Three line shapes are recognized, in priority order: group header,
//! subgroup header, sequence definition. Anything else is free-form
//! commentary and is skipped.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;

use crate::catalog::{Catalog, EmojiData, EmojiId, GroupData, GroupId, SubGroupData, SubGroupId};
use crate::codepoint::{self, CodepointError};
use crate::modifier;
use crate::pattern::PatternCorpus;
use crate::Snapshot;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Codepoint Error: {0}")]
    Codepoint(#[from] CodepointError),

    #[error("Subgroup header with no active group: {0:?}")]
    OrphanSubgroup(SmolStr),

    #[error("Sequence line with no active subgroup: {0:?}")]
    OrphanSequence(SmolStr),

    #[error("Regex Error: {0}")]
    Regex(#[from] regex::Error),
}

static GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^# group: (.*)").unwrap());
static SUBGROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^# subgroup: (.*)").unwrap());
static SEQUENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9a-fA-F ]+[0-9a-fA-F]).*; *([-a-z]*) *# [^ ]* (E[0-9.]* )?(.*)").unwrap());

#[derive(Default)]
pub(crate) struct CatalogBuilder {
    catalog: Catalog,

    /// Only needed to resolve variation parents while parsing.
    name_lookup: HashMap<SmolStr, EmojiId>,

    corpus: PatternCorpus,

    current_group: Option<GroupId>,
    current_subgroup: Option<SubGroupId>,
}

impl CatalogBuilder {
    pub fn push_line(
        &mut self,
        line: &str,
        renderable: &mut dyn FnMut(&str) -> bool,
    ) -> Result<(), BuildError> {
        if let Some(m) = GROUP_RE.captures(line) {
            let id = GroupId(self.catalog.groups.len() as u32);

            self.catalog.groups.push(GroupData {
                name: SmolStr::new(&m[1]),
                subgroups: Vec::new(),
            });

            self.current_group = Some(id);
            self.current_subgroup = None;

            return Ok(());
        }

        if let Some(m) = SUBGROUP_RE.captures(line) {
            let name = SmolStr::new(&m[1]);

            let group = self
                .current_group
                .ok_or_else(|| BuildError::OrphanSubgroup(name.clone()))?;

            let id = SubGroupId(self.catalog.subgroups.len() as u32);

            self.catalog.subgroups.push(SubGroupData {
                name,
                group,
                emoji_list: Vec::new(),
            });
            self.catalog.groups[group.0 as usize].subgroups.push(id);

            self.current_subgroup = Some(id);

            return Ok(());
        }

        match SEQUENCE_RE.captures(line) {
            Some(m) => self.push_sequence(&m[1], &m[2], &m[4], renderable),
            None => Ok(()), // blank line or free-form comment
        }
    }

    fn push_sequence(
        &mut self,
        sequence: &str,
        status: &str,
        name: &str,
        renderable: &mut dyn FnMut(&str) -> bool,
    ) -> Result<(), BuildError> {
        let text = codepoint::decode_sequence(sequence)?;

        let gen = modifier::generalize(&text);

        // An explicit non-first variant is already covered by the generalized
        // branch of its canonical sibling; adding it would only duplicate
        // alternation branches.
        if !gen.has_nonfirst_modifier {
            self.corpus.add(gen.pattern);
        }

        // Only keep the fully-qualified form of an emoji in the catalog. The
        // equivalent is looked up both with a plain trailing variation
        // selector and with the selector re-inserted before a combining
        // keycap.
        if matches!(status, "unqualified" | "minimally-qualified") {
            let qualified = format!("{text}\u{FE0F}");
            if self.catalog.text_lookup.contains_key(qualified.as_str()) {
                return Ok(());
            }

            let keycap = text.replace('\u{20E3}', "\u{FE0F}\u{20E3}");
            if self.catalog.text_lookup.contains_key(keycap.as_str()) {
                return Ok(());
            }
        }

        let subgroup = self
            .current_subgroup
            .ok_or_else(|| BuildError::OrphanSequence(SmolStr::new(sequence)))?;

        let id = EmojiId(self.catalog.emojis.len() as u32);
        let name = SmolStr::new(name);

        self.catalog.emojis.push(EmojiData {
            name: name.clone(),
            text: text.clone(),
            renderable: renderable(&text),
            subgroup,
            variations: Vec::new(),
        });

        self.catalog.text_lookup.insert(text, id);
        self.name_lookup.insert(name.clone(), id);

        // A modifier-bearing emoji whose name prefix (before ':') names an
        // existing entry is one of its variations and stays out of the
        // subgroup list. A variation that precedes its base in the source is
        // not linked and ends up as a standalone entry; single-pass parsing
        // accepts that. Bare modifier components resolve to themselves here,
        // which is what leaves the Components group empty for pruning.
        let base_name = name.split(':').next().unwrap_or(name.as_str());

        if gen.has_modifier {
            if let Some(&parent) = self.name_lookup.get(base_name) {
                self.catalog.emojis[parent.0 as usize].variations.push(id);
                return Ok(());
            }
        }

        self.catalog.subgroups[subgroup.0 as usize].emoji_list.push(id);

        Ok(())
    }

    pub fn finish(mut self) -> Result<Snapshot, BuildError> {
        self.catalog.visible = (0..self.catalog.groups.len() as u32)
            .map(GroupId)
            .filter(|&id| self.catalog.group_emoji_count(id) > 0)
            .collect();

        let pruned = self.catalog.groups.len() - self.catalog.visible.len();
        if pruned > 0 {
            log::debug!("Pruned {pruned} empty group(s) from the catalog");
        }

        log::debug!(
            "Built emoji catalog: {} groups, {} emoji, {} pattern branches",
            self.catalog.visible.len(),
            self.catalog.emojis.len(),
            self.corpus.len(),
        );

        let matchers = self.corpus.compile()?;

        Ok(Snapshot {
            catalog: self.catalog,
            matchers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_shapes() {
        assert_eq!(&GROUP_RE.captures("# group: Smileys & Emotion").unwrap()[1], "Smileys & Emotion");
        assert_eq!(&SUBGROUP_RE.captures("# subgroup: face-smiling").unwrap()[1], "face-smiling");

        let m = SEQUENCE_RE
            .captures("1F600                                                  ; fully-qualified     # \u{1F600} E1.0 grinning face")
            .unwrap();

        assert_eq!(&m[1], "1F600");
        assert_eq!(&m[2], "fully-qualified");
        assert_eq!(&m[4], "grinning face");
    }

    #[test]
    fn test_sequence_without_version_marker() {
        // platform bonus lines ship without the Exx.x marker
        let m = SEQUENCE_RE
            .captures("1F431 200D 1F680 ; fully-qualified # \u{1F431}\u{200D}\u{1F680} astro cat")
            .unwrap();

        assert_eq!(&m[1], "1F431 200D 1F680");
        assert!(m.get(3).is_none());
        assert_eq!(&m[4], "astro cat");
    }

    #[test]
    fn test_ignores_freeform_lines() {
        let mut builder = CatalogBuilder::default();
        let mut always = |_: &str| true;

        builder.push_line("# emoji-test.txt", &mut always).unwrap();
        builder.push_line("", &mut always).unwrap();
        builder.push_line("# Status: component | fully-qualified", &mut always).unwrap();

        let snapshot = builder.finish().unwrap();
        assert!(snapshot.catalog().is_empty());
    }

    #[test]
    fn test_orphan_subgroup_is_fatal() {
        let mut builder = CatalogBuilder::default();
        let mut always = |_: &str| true;

        let err = builder.push_line("# subgroup: face-smiling", &mut always).unwrap_err();
        assert!(matches!(err, BuildError::OrphanSubgroup(_)));
    }

    #[test]
    fn test_orphan_sequence_is_fatal() {
        let mut builder = CatalogBuilder::default();
        let mut always = |_: &str| true;

        builder.push_line("# group: Smileys & Emotion", &mut always).unwrap();

        let err = builder
            .push_line("1F600 ; fully-qualified # \u{1F600} E1.0 grinning face", &mut always)
            .unwrap_err();
        assert!(matches!(err, BuildError::OrphanSequence(_)));
    }
}
