pub mod controller;
pub mod sort;
pub mod view;

pub use controller::{Controller, NavState, SessionError};
pub use sort::{SortColumn, SortCriterion, SortDirection};
pub use view::{Screen, ViewAdapter};
