pub mod error;
pub mod span;
pub mod value;

pub use error::LunaticError;
pub use span::Span;
pub use value::{NativeFn, Value};
