//! Command domain
//!
//! Classification of raw terminal input into an [`Intent`].

mod intent;

pub use intent::{Intent, SAGE_PREFIX};
