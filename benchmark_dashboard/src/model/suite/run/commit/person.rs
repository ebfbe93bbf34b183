//!
//! A commit author or committer.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A commit author or committer.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// E-mail address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account handle on the hosting service.
    pub username: String,
}
