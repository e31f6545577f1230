pub mod list_io;
pub mod watcher;
