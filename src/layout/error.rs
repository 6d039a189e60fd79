//! Errors raised while decoding a persisted layout.

use thiserror::Error;

/// Reasons a serialized layout is rejected.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The text is not a JSON array of placement records.
    #[error("Invalid layout data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two placements share the same widget id.
    #[error("Duplicate widget id in layout: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// A placement has zero width or height.
    #[error("Widget {id} has an empty span ({w}x{h})")]
    EmptySpan {
        /// Widget id.
        id: String,
        /// Width in columns.
        w: u16,
        /// Height in rows.
        h: u16,
    },
}
