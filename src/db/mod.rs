pub mod dblists;

pub use dblists::{DbLists, ItemRow, ListRow};
