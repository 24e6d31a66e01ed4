//! Library components of the `mcod` command-line tool.

pub mod io;
pub mod logging;
