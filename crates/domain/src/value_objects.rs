//! Value objects shared with the rest of the workspace.

pub use count_chars_shared_kernel::value_objects::CharCount;
