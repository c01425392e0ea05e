//! Order-preserving collections of unique values.
//!
//! - [`UniqueSequence`]: insertion-ordered set backed by a slot arena and a
//!   hash index
//! - [`SequenceError`]: failures of the positional accessors and strict moves
//!
//! # Examples
//!
//! ```rust
//! use unique_sequence::collection::UniqueSequence;
//!
//! let mut sequence = UniqueSequence::new();
//! sequence.add(1);
//! sequence.add(2);
//! sequence.add(1);
//! assert_eq!(sequence.len(), 2);
//!
//! sequence.move_last(1);
//! assert_eq!(sequence.to_vec(), vec![2, 1]);
//!
//! // Snapshots do not follow later mutation
//! let snapshot = sequence.clone();
//! sequence.remove(&2);
//! assert_eq!(snapshot.len(), 2);
//! assert_eq!(sequence.len(), 1);
//! ```

// =============================================================================
// Default Hash Builder
// =============================================================================

/// Hash builder used by [`UniqueSequence::new`].
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`; with the
/// `ahash` feature (and not `fxhash`) it is `ahash::RandomState`. Otherwise it
/// is the standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`UniqueSequence::new`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`UniqueSequence::new`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod error;
mod unique_sequence;

pub use error::Operand;
pub use error::SequenceError;
pub use unique_sequence::UniqueSequence;
pub use unique_sequence::UniqueSequenceIntoIterator;
pub use unique_sequence::UniqueSequenceIterator;
