//! Filesystem operations: walking, locating folders, copying and renaming.

mod atomic;
mod copy;
mod helpers;
pub mod locate;
mod util;
pub mod walk;

pub use atomic::try_atomic_move;
pub use copy::{copy_entries, copy_file};
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use locate::find_folder;
pub use walk::{WalkEntry, list_entries, list_files};
