//! # unique-sequence
//!
//! An insertion-ordered collection of unique values.
//!
//! ## Overview
//!
//! [`UniqueSequence`] behaves like a `Vec` that refuses duplicates: elements
//! keep the order in which they were added, membership is answered in O(1),
//! and elements can be relocated to the front, the back, or next to another
//! element without disturbing the relative order of the rest.
//!
//! ## Feature Flags
//!
//! - `fxhash`: Use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: Use `ahash::RandomState` as the default hasher
//! - `tracing`: Emit `tracing` events for slot reuse and rejected moves
//!
//! ## Example
//!
//! ```rust
//! use unique_sequence::prelude::*;
//!
//! let mut sequence: UniqueSequence<&str> = ["a", "b", "c"].into_iter().collect();
//! sequence.add("b");
//! assert_eq!(sequence.to_vec(), vec!["a", "b", "c"]);
//!
//! sequence.move_first("c");
//! assert_eq!(sequence.to_vec(), vec!["c", "a", "b"]);
//!
//! assert_eq!(
//!     sequence.move_after(&"a", &"d"),
//!     Err(SequenceError::ElementNotFound { operand: Operand::Anchor })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so arguments must not carry side effects.
macro_rules! trace_event {
    ($level:ident, $($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!(target: "unique_sequence", $($argument)+);
        }
    };
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use unique_sequence::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;

pub use collection::{DefaultHashBuilder, Operand, SequenceError, UniqueSequence};
