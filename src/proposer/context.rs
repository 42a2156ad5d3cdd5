//! Optional JSON context file for structure proposals.
//!
//! The file's declared type is judged from its extension; the content is
//! passed through to the prompt as-is.

use std::path::Path;

use crate::error::ContextError;

/// Whether the path declares JSON content
pub fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read the raw text of a JSON context file
pub fn load_context(path: &Path) -> Result<String, ContextError> {
    if !is_json_path(path) {
        return Err(ContextError::NotJson(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| ContextError::Io {
        path: path.to_path_buf(),
        source,
    })
}
