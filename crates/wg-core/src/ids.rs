//! Strongly typed identifier wrappers around OSM element ids.
//!
//! OSM ids are signed 64-bit integers and are opaque to the extractor: they
//! are copied from the source graph into the output records unchanged.  All
//! IDs are `Copy + Ord + Hash` so they can be used as set members and map keys
//! without ceremony.  With the `serde` feature an id serializes as its bare
//! integer.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw OSM id.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Id of a graph node (an OSM node id).
    pub struct NodeId(i64);
}

typed_id! {
    /// Id of the OSM way an edge was derived from.
    pub struct WayId(i64);
}
