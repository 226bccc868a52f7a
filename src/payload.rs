// src/payload.rs
// =============================================================================
// This module decodes the commit payload handed to us by a push webhook.
//
// The payload is the `commits` array of a GitHub push event:
//
//   [{"id": "abc123", "modified": ["src/a.obo"], "added": [], ...}]
//
// Only `id`, `modified` and `added` matter here. Everything else (message,
// author, timestamp, ...) is ignored so the raw webhook array can be passed
// through unchanged.
// =============================================================================

use serde::Deserialize;

use crate::error::Result;

/// One commit from the push payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitDescriptor {
    /// Revision (commit SHA) the files are downloaded at
    #[serde(rename = "id")]
    pub revision: String,

    /// Paths changed by this commit
    #[serde(default)]
    pub modified: Vec<String>,

    /// Paths created by this commit, only used with --include-added
    #[serde(default)]
    pub added: Vec<String>,
}

impl CommitDescriptor {
    /// Paths to consider for download, in payload order
    ///
    /// `modified` always comes first; `added` follows when requested.
    pub fn candidate_paths(&self, include_added: bool) -> impl Iterator<Item = &str> {
        let added: &[String] = if include_added { &self.added } else { &[] };
        self.modified
            .iter()
            .chain(added.iter())
            .map(String::as_str)
    }
}

// Decodes the raw payload string into a list of commits
//
// An empty array is fine and simply means there is nothing to download.
// Anything that is not a JSON array of objects with an `id` is rejected as a
// whole; we never process half a payload.
pub fn decode_payload(raw: &str) -> Result<Vec<CommitDescriptor>> {
    let commits: Vec<CommitDescriptor> = serde_json::from_str(raw)?;
    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[test]
    fn test_decode_single_commit() {
        let commits =
            decode_payload(r#"[{"id":"abc123","modified":["src/a.obo","src/b.txt"]}]"#).unwrap();
        assert_eq!(
            commits,
            vec![CommitDescriptor {
                revision: "abc123".to_string(),
                modified: vec!["src/a.obo".to_string(), "src/b.txt".to_string()],
                added: vec![],
            }]
        );
    }

    #[test]
    fn test_decode_empty_array() {
        let commits = decode_payload("[]").unwrap();
        assert!(commits.is_empty());
    }

    #[test]
    fn test_decode_keeps_commit_order() {
        let commits = decode_payload(
            r#"[{"id":"first","modified":[]},{"id":"second","modified":["x.obo"]}]"#,
        )
        .unwrap();
        let ids: Vec<&str> = commits.iter().map(|c| c.revision.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_decode_ignores_webhook_extras() {
        let raw = r#"[{
            "id": "0d1a26e67d8f5eaf1f6ba5c57fc3c7d91ac0fd1c",
            "tree_id": "f9d2a07e9488b91af2641b26b9407fe22a451433",
            "distinct": true,
            "message": "Update ontology",
            "timestamp": "2024-03-01T12:00:00Z",
            "author": {"name": "dev", "email": "dev@example.com"},
            "added": ["new.obo"],
            "removed": ["old.obo"],
            "modified": ["ontology/go.obo"]
        }]"#;
        let commits = decode_payload(raw).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].modified, vec!["ontology/go.obo"]);
        assert_eq!(commits[0].added, vec!["new.obo"]);
    }

    #[test]
    fn test_missing_path_lists_default_to_empty() {
        let commits = decode_payload(r#"[{"id":"abc123"}]"#).unwrap();
        assert!(commits[0].modified.is_empty());
        assert!(commits[0].added.is_empty());
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::object_not_array(r#"{"id":"abc123","modified":[]}"#)]
    #[case::missing_id(r#"[{"modified":["a.obo"]}]"#)]
    #[case::modified_not_list(r#"[{"id":"abc123","modified":"a.obo"}]"#)]
    #[case::empty_string("")]
    fn test_malformed_payload_is_decode_error(#[case] raw: &str) {
        let err = decode_payload(raw).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }

    #[test]
    fn test_candidate_paths_skip_added_by_default() {
        let commit = CommitDescriptor {
            revision: "abc".to_string(),
            modified: vec!["m.obo".to_string()],
            added: vec!["a.obo".to_string()],
        };
        let paths: Vec<&str> = commit.candidate_paths(false).collect();
        assert_eq!(paths, vec!["m.obo"]);

        let paths: Vec<&str> = commit.candidate_paths(true).collect();
        assert_eq!(paths, vec!["m.obo", "a.obo"]);
    }
}
