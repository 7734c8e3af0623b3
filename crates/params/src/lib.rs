pub mod flatten;
pub mod value;

pub use flatten::{flatten, unflatten, unflatten_truncating, UnflattenError};
pub use value::{Param, Trainability, Value};
