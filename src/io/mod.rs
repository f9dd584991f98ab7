pub mod config_io;
pub mod tasks_io;
pub mod watcher;
