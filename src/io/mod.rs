pub mod config_io;
pub mod fixture;
pub mod logging;
