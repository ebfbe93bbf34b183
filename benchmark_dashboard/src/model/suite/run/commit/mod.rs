//!
//! The commit a run has been measured on.
//!

pub mod person;

use serde::Deserialize;
use serde::Serialize;

use self::person::Person;

///
/// The commit a run has been measured on.
///
/// Mirrors the `head_commit` object of a push event, so the fields are kept verbatim.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit author.
    pub author: Person,
    /// Commit committer.
    pub committer: Person,
    /// Whether the commit is distinct from the ones of previous pushes.
    /// Defined by the CI upstream, passed through as is.
    pub distinct: bool,
    /// Full commit hash.
    pub id: String,
    /// Commit message.
    pub message: String,
    /// ISO-8601 timestamp with offset.
    pub timestamp: String,
    /// Tree object hash.
    pub tree_id: String,
    /// Web URL of the commit.
    pub url: String,
}

impl Commit {
    /// Length of a full SHA-1 commit hash.
    pub const FULL_HASH_LENGTH: usize = 40;

    /// Length of the abbreviated hash used in renderings.
    pub const SHORT_HASH_LENGTH: usize = 7;

    ///
    /// Returns the abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(Self::SHORT_HASH_LENGTH) {
            Some((index, _)) => &self.id[..index],
            None => self.id.as_str(),
        }
    }

    ///
    /// Whether the identifier looks like a full git commit hash.
    ///
    pub fn has_full_hash(&self) -> bool {
        self.id.len() == Self::FULL_HASH_LENGTH
            && self.id.chars().all(|character| character.is_ascii_hexdigit())
    }

    ///
    /// The first line of the commit message.
    ///
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}
