//! Identifiers for timelines, tracks, keyframes and host objects.
//!
//! Timeline/track/keyframe ids are random v4 UUIDs so that pure edit
//! functions can mint them without threading an allocator through.
//! Object ids belong to the host and are kept as opaque strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TimelineError;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh id.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse an id from its hyphenated UUID form.
            pub fn from_string(id: impl AsRef<str>) -> Result<Self, TimelineError> {
                Uuid::parse_str(id.as_ref())
                    .map(Self)
                    .map_err(|_| TimelineError::InvalidId {
                        kind: $label,
                        id: id.as_ref().to_string(),
                    })
            }

            #[inline]
            pub fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a timeline.
    TimelineId,
    "timeline"
);
uuid_id!(
    /// Unique identifier for a track within a timeline.
    TrackId,
    "track"
);
uuid_id!(
    /// Unique identifier for a keyframe. Immutable once assigned.
    KeyframeId,
    "keyframe"
);

/// Host-side identifier of an animated object (e.g. a canvas element id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for ObjectId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
