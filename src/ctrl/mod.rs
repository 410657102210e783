mod confirm;
pub use confirm::*;

mod error;
pub use error::*;

mod users;
pub use users::*;
