pub mod value;
pub use value::*;

pub mod values;
pub use values::*;
