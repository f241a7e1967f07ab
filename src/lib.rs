//! Bundles the source files of a flat directory into a single text archive
//! with `// FILE: <name>` marker lines, and splits such an archive back into
//! files.

mod error;
pub mod exit_codes;
pub mod format;
mod pack;
mod unpack;

pub use error::{Error, Result};
pub use format::Entry;
pub use pack::{pack, PackConfig, PackReport};
pub use unpack::{list, unpack, NamePolicy, UnpackConfig, UnpackReport};
