mod contracts;
mod error;
mod status;

pub use contracts::*;
pub use error::*;
pub use status::*;
