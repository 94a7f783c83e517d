pub mod item;
pub mod list;
pub mod store;
pub mod config;

pub use item::*;
pub use list::*;
pub use store::*;
pub use config::*;
