//! Shared message envelope and JSON codec for the classroom broadcast channel.
//!
//! This crate owns the wire representation exchanged by every peer in a live
//! session. The envelope is a tagged JSON union: `type` selects the payload,
//! payload fields stay `camelCase` because the channel is shared with web peers,
//! and unrecognized `type` values decode to [`Envelope::Unknown`] so older
//! builds skate over newer traffic instead of erroring on it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw bytes are not a valid envelope of any known shape.
    #[error("failed to decode message envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Drawing primitive kind for a whiteboard element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Freehand stroke; point list rides in `props`.
    Pen,
    Line,
    Rect,
    Ellipse,
    Text,
}

/// A single whiteboard element.
///
/// `version` counts edits to this element and only ever grows. Deletion is a
/// tombstone (`is_deleted` plus a version bump) rather than removal, so the
/// change still registers as growth under the snapshot version-sum gate and
/// propagates like any other edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Stable element identifier (UUID string).
    pub id: String,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Open-ended visual properties (stroke color, font, point lists).
    #[serde(default)]
    pub props: Value,
    /// Monotonic per-element edit counter.
    pub version: i64,
    #[serde(default)]
    pub is_deleted: bool,
}

/// The shared subset of whiteboard display settings.
///
/// Per-peer viewport state (scroll, zoom) deliberately stays out of this
/// struct; peers only agree on what the surface itself looks like.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    /// Canvas background color, CSS hex string.
    pub background: String,
    /// Grid spacing in canvas units; `None` means no grid.
    pub grid_size: Option<u32>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_owned(),
            grid_size: None,
        }
    }
}

/// Full whiteboard state as carried by a `WB_SYNC` broadcast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhiteboardSnapshot {
    /// Every element in draw order, tombstones included.
    pub elements: Vec<Shape>,
    pub view: ViewSettings,
}

/// A poll as announced by `POLL_START`.
///
/// Carries no correct-answer field by construction; answer metadata is
/// author-side only and never reaches the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    /// Unique poll identifier (UUID string).
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Milliseconds since the Unix epoch at creation.
    pub created_at: i64,
}

/// A single message on the classroom broadcast channel.
///
/// Sender identity is attributed by the transport layer and is deliberately
/// absent from the payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Envelope {
    /// Whole-state whiteboard snapshot; receivers replace, never merge.
    #[serde(rename = "WB_SYNC")]
    WhiteboardSync(WhiteboardSnapshot),
    /// Announces a new poll; replaces any active one at receivers.
    #[serde(rename = "POLL_START")]
    PollStart(Poll),
    /// One peer's ballot for the poll named by `poll_id`.
    #[serde(rename = "POLL_VOTE", rename_all = "camelCase")]
    PollVote { poll_id: String, option_index: usize },
    /// Closes the poll named by `poll_id`.
    #[serde(rename = "POLL_END", rename_all = "camelCase")]
    PollEnd { poll_id: String },
    /// Transient floating reaction; safe to lose.
    #[serde(rename = "REACTION")]
    Reaction { glyph: String },
    /// Raises or lowers `target`'s hand. A peer toggles its own hand;
    /// a teacher may lower anyone's.
    #[serde(rename = "HAND_TOGGLE")]
    HandToggle { target: String, raised: bool },
    /// A late joiner asking current peers to re-broadcast live state.
    #[serde(rename = "SYNC_REQUEST")]
    SyncRequest,
    /// Any `type` this build does not know. Ignored, never an error.
    #[serde(other)]
    Unknown,
}

/// Encode an envelope into JSON bytes.
#[must_use]
pub fn encode(envelope: &Envelope) -> Vec<u8> {
    // Every variant serializes as a JSON object with string keys, so
    // serialization cannot fail; the empty-vec fallback is unreachable.
    serde_json::to_vec(envelope).unwrap_or_default()
}

/// Decode JSON bytes into an envelope.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for bytes that are not a known envelope
/// shape. An unrecognized `type` on well-formed JSON is not an error; it
/// decodes to [`Envelope::Unknown`].
pub fn decode(bytes: &[u8]) -> Result<Envelope, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
