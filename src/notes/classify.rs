//! Commit classification by message prefix.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Release-note category a commit is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Feature,
    Fix,
    Chore,
    Other,
}

impl Category {
    /// Classify one message, returning its category and the message with the
    /// matched prefix removed.
    ///
    /// Matching is case-insensitive; the remainder keeps its original casing.
    /// Any whitespace after the prefix, Unicode included, is dropped.
    /// Messages that match no prefix come back unchanged as `Other`.
    pub fn classify(message: &str) -> (Category, String) {
        for rule in PREFIX_RULES.iter() {
            if let Some(found) = rule.pattern.find(message) {
                let remainder = message[found.end()..].trim_start_matches(char::is_whitespace);
                return (rule.category, remainder.to_string());
            }
        }
        (Category::Other, message.to_string())
    }
}

/// A prefix pattern and the category it selects.
struct PrefixRule {
    pattern: Regex,
    category: Category,
}

impl PrefixRule {
    fn new(pattern: &str, category: Category) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid regex"),
            category,
        }
    }
}

/// Evaluated top to bottom, first match wins.
static PREFIX_RULES: LazyLock<Vec<PrefixRule>> = LazyLock::new(|| {
    vec![
        PrefixRule::new(r"^(?i)(feat:|feature:)", Category::Feature),
        PrefixRule::new(r"^(?i)(fix:|bug:)", Category::Fix),
        PrefixRule::new(r"^(?i)(chore:|docs:|style:)", Category::Chore),
    ]
});

/// Commit messages partitioned by category, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedCommits {
    pub features: Vec<String>,
    pub fixes: Vec<String>,
    pub chores: Vec<String>,
    pub others: Vec<String>,
}

impl ClassifiedCommits {
    /// Total number of classified messages across all buckets.
    pub fn len(&self) -> usize {
        self.features.len() + self.fixes.len() + self.chores.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, category: Category, message: String) {
        match category {
            Category::Feature => self.features.push(message),
            Category::Fix => self.fixes.push(message),
            Category::Chore => self.chores.push(message),
            Category::Other => self.others.push(message),
        }
    }
}

/// Partition commit messages into features, fixes, chores and others.
pub fn classify_commits<I, S>(messages: I) -> ClassifiedCommits
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classified = ClassifiedCommits::default();

    for message in messages {
        let (category, stripped) = Category::classify(message.as_ref());
        classified.push(category, stripped);
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_aliases() {
        assert_eq!(
            Category::classify("feat: add login"),
            (Category::Feature, "add login".to_string())
        );
        assert_eq!(
            Category::classify("feature: add logout"),
            (Category::Feature, "add logout".to_string())
        );
    }

    #[test]
    fn test_fix_aliases() {
        assert_eq!(
            Category::classify("bug: crash on start"),
            (Category::Fix, "crash on start".to_string())
        );
        assert_eq!(
            Category::classify("Fix:typo"),
            (Category::Fix, "typo".to_string())
        );
    }

    #[test]
    fn test_chore_aliases() {
        for message in ["chore: bump deps", "docs: bump deps", "STYLE: bump deps"] {
            assert_eq!(
                Category::classify(message),
                (Category::Chore, "bump deps".to_string())
            );
        }
    }

    #[test]
    fn test_strip_preserves_remainder_case() {
        assert_eq!(
            Category::classify("FEAT: Add login"),
            (Category::Feature, "Add login".to_string())
        );
    }

    #[test]
    fn test_unicode_whitespace_after_prefix_stripped() {
        assert_eq!(
            Category::classify("feat:\u{a0}add login"),
            (Category::Feature, "add login".to_string())
        );
        assert_eq!(
            Category::classify("fix:\u{2003}\t crash"),
            (Category::Fix, "crash".to_string())
        );
    }

    #[test]
    fn test_only_first_prefix_stripped() {
        assert_eq!(
            Category::classify("fix: fix: double"),
            (Category::Fix, "fix: double".to_string())
        );
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        assert_eq!(
            Category::classify("refactor: not a feat: commit"),
            (Category::Other, "refactor: not a feat: commit".to_string())
        );
    }

    #[test]
    fn test_scoped_commit_is_other() {
        // Scopes are not part of the prefix set.
        let (category, message) = Category::classify("feat(api): add endpoint");
        assert_eq!(category, Category::Other);
        assert_eq!(message, "feat(api): add endpoint");
    }

    #[test]
    fn test_empty_message_goes_to_others() {
        let classified = classify_commits(["", "   "]);
        assert_eq!(classified.others, vec!["".to_string(), "   ".to_string()]);
        assert_eq!(classified.len(), 2);
    }

    #[test]
    fn test_classify_keeps_input_order() {
        let classified = classify_commits([
            "feat: one",
            "misc change",
            "feat: two",
            "fix: three",
            "docs: four",
            "feature: five",
        ]);

        assert_eq!(classified.features, vec!["one", "two", "five"]);
        assert_eq!(classified.fixes, vec!["three"]);
        assert_eq!(classified.chores, vec!["four"]);
        assert_eq!(classified.others, vec!["misc change"]);
    }
}
