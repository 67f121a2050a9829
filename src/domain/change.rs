use std::fmt;

const UNTRACKED_HEADER: &str = "New untracked files:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    Staged,
    Unstaged,
    Untracked,
}

impl fmt::Display for ChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeSource::Staged => write!(f, "staged changes"),
            ChangeSource::Unstaged => write!(f, "unstaged changes"),
            ChangeSource::Untracked => write!(f, "untracked files"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    pub source: ChangeSource,
    pub text: String,
}

impl ChangeSet {
    pub fn from_diff(source: ChangeSource, diff: &str) -> Option<Self> {
        let trimmed = diff.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            source,
            text: trimmed.to_string(),
        })
    }

    /// Summarizes an untracked-file listing, one `+ <file>` line per entry.
    pub fn from_untracked<I, S>(files: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for file in files {
            let file = file.as_ref();
            if file.is_empty() {
                continue;
            }
            if text.is_empty() {
                text.push_str(UNTRACKED_HEADER);
                text.push('\n');
            }
            text.push_str("+ ");
            text.push_str(file);
            text.push('\n');
        }

        if text.is_empty() {
            None
        } else {
            Some(Self {
                source: ChangeSource::Untracked,
                text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_diff_is_no_change() {
        assert_eq!(ChangeSet::from_diff(ChangeSource::Staged, " \n\t\n"), None);
    }

    #[test]
    fn diff_is_trimmed() {
        let changes = ChangeSet::from_diff(ChangeSource::Unstaged, "\ndiff --git a b\n\n").unwrap();
        assert_eq!(changes.text, "diff --git a b");
        assert_eq!(changes.source, ChangeSource::Unstaged);
    }

    #[test]
    fn untracked_listing_keeps_order() {
        let changes = ChangeSet::from_untracked(["a.txt", "b.txt"]).unwrap();
        assert_eq!(changes.source, ChangeSource::Untracked);
        assert_eq!(changes.text, "New untracked files:\n+ a.txt\n+ b.txt\n");
    }

    #[test]
    fn untracked_names_keep_surrounding_spaces() {
        let changes = ChangeSet::from_untracked([" lead.txt", "trail.txt "]).unwrap();
        assert_eq!(changes.text, "New untracked files:\n+  lead.txt\n+ trail.txt \n");
    }

    #[test]
    fn empty_untracked_listing_is_no_change() {
        assert_eq!(ChangeSet::from_untracked(["", ""]), None);
        assert_eq!(ChangeSet::from_untracked(Vec::<String>::new()), None);
    }
}
