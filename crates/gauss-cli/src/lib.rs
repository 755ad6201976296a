//! gauss-cli: file I/O and timing helpers behind the `gauss` binary.
pub mod io;
pub mod timing;
