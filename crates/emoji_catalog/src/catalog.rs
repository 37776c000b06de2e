//! Catalog storage and its read-only view types.
//!
//! Entities live in flat arenas on [`Catalog`] and reference each other by
//! index, so the back-references (emoji → subgroup → group) never form
//! ownership cycles. Pruned groups stay in the arena — only the `visible`
//! list decides what [`Catalog::groups`] yields — which keeps every stored
//! back-reference valid.

use std::collections::HashMap;
use std::fmt;

use smol_str::SmolStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GroupId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SubGroupId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EmojiId(pub(crate) u32);

#[derive(Debug)]
pub(crate) struct GroupData {
    pub name: SmolStr,
    pub subgroups: Vec<SubGroupId>,
}

#[derive(Debug)]
pub(crate) struct SubGroupData {
    pub name: SmolStr,
    pub group: GroupId,
    pub emoji_list: Vec<EmojiId>,
}

#[derive(Debug)]
pub(crate) struct EmojiData {
    pub name: SmolStr,
    pub text: SmolStr,
    pub renderable: bool,
    pub subgroup: SubGroupId,
    pub variations: Vec<EmojiId>,
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) groups: Vec<GroupData>,
    pub(crate) subgroups: Vec<SubGroupData>,
    pub(crate) emojis: Vec<EmojiData>,

    /// Groups with at least one emoji, in insertion order.
    pub(crate) visible: Vec<GroupId>,

    pub(crate) text_lookup: HashMap<SmolStr, EmojiId>,
}

impl Catalog {
    /// Iterates the non-empty groups in source order.
    pub fn groups(&self) -> impl Iterator<Item = Group<'_>> + '_ {
        self.visible.iter().map(move |&id| Group { cat: self, id })
    }

    /// Number of visible groups.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Resolves a literal emoji text to its catalog entry.
    pub fn lookup(&self, text: &str) -> Option<Emoji<'_>> {
        self.text_lookup.get(text).map(|&id| Emoji { cat: self, id })
    }

    /// Every base emoji of every visible group, in catalog order.
    pub fn emojis(&self) -> impl Iterator<Item = Emoji<'_>> + '_ {
        self.groups().flat_map(|g| g.emojis())
    }

    pub(crate) fn group_emoji_count(&self, id: GroupId) -> usize {
        self.groups[id.0 as usize]
            .subgroups
            .iter()
            .map(|&s| self.subgroups[s.0 as usize].emoji_list.len())
            .sum()
    }
}

#[derive(Clone, Copy)]
pub struct Group<'a> {
    cat: &'a Catalog,
    id: GroupId,
}

impl<'a> Group<'a> {
    fn raw(self) -> &'a GroupData {
        &self.cat.groups[self.id.0 as usize]
    }

    pub fn name(self) -> &'a str {
        &self.raw().name
    }

    pub fn subgroups(self) -> impl Iterator<Item = SubGroup<'a>> + 'a {
        let cat = self.cat;
        self.raw().subgroups.iter().map(move |&id| SubGroup { cat, id })
    }

    /// Base emoji across all subgroups.
    pub fn emojis(self) -> impl Iterator<Item = Emoji<'a>> + 'a {
        self.subgroups().flat_map(|s| s.emojis())
    }

    pub fn emoji_count(self) -> usize {
        self.cat.group_emoji_count(self.id)
    }

    /// Representative glyph: the text of the first emoji of the first
    /// subgroup. `None` for shapes that never survive pruning.
    pub fn icon(self) -> Option<&'a str> {
        self.subgroups().next()?.emojis().next().map(|e| e.text())
    }
}

impl fmt::Debug for Group<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group").field("name", &self.name()).finish()
    }
}

#[derive(Clone, Copy)]
pub struct SubGroup<'a> {
    cat: &'a Catalog,
    id: SubGroupId,
}

impl<'a> SubGroup<'a> {
    fn raw(self) -> &'a SubGroupData {
        &self.cat.subgroups[self.id.0 as usize]
    }

    pub fn name(self) -> &'a str {
        &self.raw().name
    }

    /// The owning group.
    pub fn group(self) -> Group<'a> {
        Group {
            cat: self.cat,
            id: self.raw().group,
        }
    }

    /// Base emoji only; variations hang off their parent.
    pub fn emojis(self) -> impl Iterator<Item = Emoji<'a>> + 'a {
        let cat = self.cat;
        self.raw().emoji_list.iter().map(move |&id| Emoji { cat, id })
    }

    pub fn len(self) -> usize {
        self.raw().emoji_list.len()
    }

    pub fn is_empty(self) -> bool {
        self.raw().emoji_list.is_empty()
    }
}

impl fmt::Debug for SubGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubGroup").field("name", &self.name()).finish()
    }
}

#[derive(Clone, Copy)]
pub struct Emoji<'a> {
    cat: &'a Catalog,
    id: EmojiId,
}

impl<'a> Emoji<'a> {
    fn raw(self) -> &'a EmojiData {
        &self.cat.emojis[self.id.0 as usize]
    }

    pub fn name(self) -> &'a str {
        &self.raw().name
    }

    /// The canonical fully-qualified text, variation selector included.
    pub fn text(self) -> &'a str {
        &self.raw().text
    }

    /// Whether the rendering backend reported it could display this emoji
    /// when the catalog was built.
    pub fn renderable(self) -> bool {
        self.raw().renderable
    }

    pub fn subgroup(self) -> SubGroup<'a> {
        SubGroup {
            cat: self.cat,
            id: self.raw().subgroup,
        }
    }

    /// Derived through the subgroup, never stored.
    pub fn group(self) -> Group<'a> {
        self.subgroup().group()
    }

    /// Modifier-bearing entities linked under this one.
    pub fn variations(self) -> impl Iterator<Item = Emoji<'a>> + 'a {
        let cat = self.cat;
        self.raw().variations.iter().map(move |&id| Emoji { cat, id })
    }

    pub fn has_variations(self) -> bool {
        !self.raw().variations.is_empty()
    }
}

impl fmt::Debug for Emoji<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emoji")
            .field("name", &self.name())
            .field("text", &self.text())
            .field("renderable", &self.renderable())
            .finish()
    }
}
