//!
//! Native JSON output.
//!

use crate::render::Rendering;

///
/// JSON array of renderings, one per series.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&[Rendering<'_>]> for Json {
    fn from(renderings: &[Rendering<'_>]) -> Self {
        let content = serde_json::to_string_pretty(renderings).expect("Always valid");
        Self { content }
    }
}
