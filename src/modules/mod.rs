pub mod catalogue;

pub use catalogue::*;
