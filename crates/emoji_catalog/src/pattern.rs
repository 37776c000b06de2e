use regex::Regex;

/// Accumulated alternation branches for the emoji matchers.
///
/// Entries are pre-escaped pattern fragments (see `modifier::generalize`),
/// not raw text, so keycap bases like `*` are already literals here.
#[derive(Default)]
pub(crate) struct PatternCorpus {
    entries: Vec<String>,
}

pub(crate) struct Matchers {
    pub one: Regex,
    pub multiple: Regex,
}

impl PatternCorpus {
    pub fn add(&mut self, fragment: String) {
        self.entries.push(fragment);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn compile(mut self) -> Result<Matchers, regex::Error> {
        // Longest branch first. Alternation in the regex crate is
        // leftmost-first, so a bare flag must not shadow flag + modifiers.
        self.entries.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = format!("({})", self.entries.join("|"));

        Ok(Matchers {
            one: Regex::new(&alternation)?,
            multiple: Regex::new(&format!("{alternation}+"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(fragments: &[&str]) -> Matchers {
        let mut corpus = PatternCorpus::default();
        for f in fragments {
            corpus.add(regex::escape(f));
        }
        corpus.compile().unwrap()
    }

    #[test]
    fn test_longest_match_first() {
        // insertion order deliberately puts the short branch first
        let m = compile(&["A", "AB"]);

        assert_eq!(m.one.find("AB").unwrap().as_str(), "AB");
    }

    #[test]
    fn test_multiple_is_contiguous() {
        let m = compile(&["X", "Y"]);

        assert_eq!(m.multiple.find("XYXX").unwrap().as_str(), "XYXX");

        // a separator breaks the run
        assert_eq!(m.multiple.find("X Y").unwrap().as_str(), "X");
    }

    #[test]
    fn test_literal_asterisk_is_escaped() {
        let m = compile(&["*\u{FE0F}\u{20E3}"]);

        assert_eq!(
            m.one.find("*\u{FE0F}\u{20E3}").unwrap().as_str(),
            "*\u{FE0F}\u{20E3}"
        );
        assert!(!m.one.is_match("\u{FE0F}\u{20E3}"));
    }
}
