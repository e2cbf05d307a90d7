pub mod convert;
pub mod iter;
pub mod macros;
pub mod types;
