//! Changed-file summary by status.

use super::{ChangedFile, FileStatus};

/// Changed paths grouped by status, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileBuckets {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
}

impl FileBuckets {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }
}

/// Group changed files into added, modified and removed paths.
///
/// Files with any other status are skipped.
pub fn summarize_files(files: &[ChangedFile]) -> FileBuckets {
    let mut buckets = FileBuckets::default();

    for file in files {
        let bucket = match file.status {
            FileStatus::Added => &mut buckets.added,
            FileStatus::Modified => &mut buckets.modified,
            FileStatus::Removed => &mut buckets.removed,
            FileStatus::Other(_) => continue,
        };
        bucket.push(file.path.clone());
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_by_status() {
        let files = vec![
            ChangedFile::new("a.rs", FileStatus::Added),
            ChangedFile::new("b.rs", FileStatus::Modified),
            ChangedFile::new("c.rs", FileStatus::Removed),
            ChangedFile::new("d.rs", FileStatus::Added),
        ];

        let buckets = summarize_files(&files);
        assert_eq!(buckets.added, vec!["a.rs", "d.rs"]);
        assert_eq!(buckets.modified, vec!["b.rs"]);
        assert_eq!(buckets.removed, vec!["c.rs"]);
        assert_eq!(buckets.len(), files.len());
    }

    #[test]
    fn test_unrecognized_status_skipped() {
        let files = vec![
            ChangedFile::new("old.rs", FileStatus::Other("renamed".to_string())),
            ChangedFile::new("new.rs", FileStatus::Modified),
        ];

        let buckets = summarize_files(&files);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.modified, vec!["new.rs"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize_files(&[]).is_empty());
    }
}
