/// Classification labels with a fixed display priority.
///
/// Variants are declared highest priority first, so `Ord` follows priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    TopicSentence,
    Narrative,
    Blank,
    Grammar,
    Vocabulary,
}

impl TagKind {
    /// Highest priority first.
    pub const PRIORITY: [TagKind; 5] = [
        TagKind::TopicSentence,
        TagKind::Narrative,
        TagKind::Blank,
        TagKind::Grammar,
        TagKind::Vocabulary,
    ];

    /// Labels authors use for this tag.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            TagKind::TopicSentence => &["주제문", "topic sentence"],
            TagKind::Narrative => &["서술", "narrative"],
            TagKind::Blank => &["빈칸", "blank"],
            TagKind::Grammar => &["어법", "grammar"],
            TagKind::Vocabulary => &["어휘", "vocabulary"],
        }
    }

    pub fn matches(self, label: &str) -> bool {
        let label = label.trim();
        self.labels().iter().any(|l| l.eq_ignore_ascii_case(label))
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|kind| kind.matches(label))
    }
}

/// Picks the one tag shown for a sentence.
///
/// Known tags win by [`TagKind::PRIORITY`]. Otherwise the first stored tag is
/// shown, in insertion order.
pub fn select_display_tag(tags: &[String]) -> Option<&str> {
    tags.iter()
        .filter_map(|tag| TagKind::from_label(tag).map(|kind| (kind, tag)))
        .min_by_key(|(kind, _)| *kind)
        .map(|(_, tag)| tag)
        .or_else(|| tags.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tags(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[rstest]
    #[case(&["어휘", "주제문"], Some("주제문"))]
    #[case(&["grammar", "narrative"], Some("narrative"))]
    #[case(&["어휘", "빈칸", "어법"], Some("빈칸"))]
    #[case(&["vocabulary", "Grammar"], Some("Grammar"))]
    #[case(&["어휘"], Some("어휘"))]
    #[case(&["zeta", "alpha"], Some("zeta"))]
    #[case(&["custom", "vocabulary"], Some("vocabulary"))]
    #[case(&[], None)]
    fn display_tag_priority(#[case] labels: &[&str], #[case] expected: Option<&str>) {
        let tags = tags(labels);
        assert_eq!(select_display_tag(&tags), expected);
    }

    #[test]
    fn first_tag_wins_among_equal_kinds() {
        let tags = tags(&["어법", "grammar"]);
        assert_eq!(select_display_tag(&tags), Some("어법"));
    }

    #[test]
    fn priority_order_matches_declaration_order() {
        let mut sorted = TagKind::PRIORITY;
        sorted.sort();
        assert_eq!(sorted, TagKind::PRIORITY);
    }

    #[test]
    fn labels_round_trip_to_kinds() {
        for kind in TagKind::PRIORITY {
            for label in kind.labels() {
                assert_eq!(TagKind::from_label(label), Some(kind));
            }
        }
        assert_eq!(TagKind::from_label(" 주제문 "), Some(TagKind::TopicSentence));
        assert_eq!(TagKind::from_label("other"), None);
    }
}
