/// Filesystem adapters for file I/O operations
mod file_writer;
mod pom_cache;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use pom_cache::DiskPomCache;
