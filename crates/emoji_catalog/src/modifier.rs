//! The fixed modifier component tables from the `Components` group of the
//! description source, in source order. Index 0 of each class is the
//! canonical variant used for pattern generalization.

/// Skin tone modifiers, light to dark.
pub const SKIN_TONES: [char; 5] = [
    '\u{1F3FB}', // light skin tone
    '\u{1F3FC}', // medium-light skin tone
    '\u{1F3FD}', // medium skin tone
    '\u{1F3FE}', // medium-dark skin tone
    '\u{1F3FF}', // dark skin tone
];

/// Hair style components.
pub const HAIR_STYLES: [char; 4] = [
    '\u{1F9B0}', // red hair
    '\u{1F9B1}', // curly hair
    '\u{1F9B3}', // white hair
    '\u{1F9B2}', // bald
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    SkinTone,
    HairStyle,
}

impl ModifierKind {
    pub const fn members(self) -> &'static [char] {
        match self {
            ModifierKind::SkinTone => &SKIN_TONES,
            ModifierKind::HairStyle => &HAIR_STYLES,
        }
    }

    /// The index-0 member, the only one whose sequences feed the pattern corpus.
    pub fn canonical(self) -> char {
        self.members()[0]
    }

    /// Alternation fragment covering every member of the class.
    pub(crate) const fn alternation(self) -> &'static str {
        match self {
            ModifierKind::SkinTone => "(\u{1F3FB}|\u{1F3FC}|\u{1F3FD}|\u{1F3FE}|\u{1F3FF})",
            ModifierKind::HairStyle => "(\u{1F9B0}|\u{1F9B1}|\u{1F9B3}|\u{1F9B2})",
        }
    }

    pub fn of(c: char) -> Option<ModifierKind> {
        if SKIN_TONES.contains(&c) {
            Some(ModifierKind::SkinTone)
        } else if HAIR_STYLES.contains(&c) {
            Some(ModifierKind::HairStyle)
        } else {
            None
        }
    }
}

pub fn contains_modifier(text: &str) -> bool {
    text.chars().any(|c| ModifierKind::of(c).is_some())
}

pub(crate) struct Generalized {
    /// Pre-escaped pattern fragment with every modifier occurrence replaced
    /// by its class alternation.
    pub pattern: String,
    pub has_modifier: bool,
    pub has_nonfirst_modifier: bool,
}

/// Rewrites `text` into a pattern fragment that matches every modifier
/// combination of it, standard or not, and reports what was found.
pub(crate) fn generalize(text: &str) -> Generalized {
    let mut pattern = String::with_capacity(text.len());
    let mut has_modifier = false;
    let mut has_nonfirst_modifier = false;

    for c in text.chars() {
        match ModifierKind::of(c) {
            Some(kind) => {
                has_modifier = true;
                has_nonfirst_modifier |= c != kind.canonical();
                pattern.push_str(kind.alternation());
            }
            // keycap sequences carry literal '#', '*' and digits
            None => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }

    Generalized {
        pattern,
        has_modifier,
        has_nonfirst_modifier,
    }
}
