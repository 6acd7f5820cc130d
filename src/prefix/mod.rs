//! List-prefix derivation.
//!
//! This is the pure core of the crate. Given the text of the line the cursor
//! sits on and the side the new line goes to, it decides what the new line
//! should start with:
//!
//! - **No prefix**: the line is not a list item, insert a bare line break
//! - **Terminate list**: the list item is empty, so the list ends here
//! - **Prefix**: continue the list with the given marker
//!
//! The core performs no I/O and holds no mutable state.

pub mod classifier;
pub mod deriver;

pub use classifier::{ListPrefix, Marker, classify};
pub use deriver::{Decision, Direction, UNCHECKED_ITEM, derive};
