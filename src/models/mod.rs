pub mod health;
pub mod ready;
pub mod item;
pub mod list;
pub mod error;

pub use health::*;
pub use ready::*;
pub use item::*;
pub use list::*;
pub use error::*;
