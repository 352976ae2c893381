pub mod advisory;
pub mod crop;
pub mod language;
pub mod query;
pub mod request;
pub mod sample;

pub use advisory::*;
pub use crop::*;
pub use language::*;
pub use query::*;
pub use request::*;
pub use sample::*;
