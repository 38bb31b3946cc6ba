pub mod diamond;
pub mod messages;
pub mod session;

pub use crate::domain::model::{Calculation, EvalError, Operation};
pub use crate::domain::ports::TokenSource;
pub use crate::utils::error::Result;
