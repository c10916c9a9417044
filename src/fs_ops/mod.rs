//! Filesystem operations: destination-name resolution and collision-safe moves.

mod atomic;
mod copy;
mod disk;
mod file_move;
mod helpers;
mod resolve;

pub use file_move::move_file;
pub use resolve::{force_extension, unique_destination, unique_destination_reserving};
