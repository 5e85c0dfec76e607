//! Constants for traditional (pre-quantum) curves

pub mod edwards;
