pub mod envelope;
pub mod movie;

pub use envelope::*;
pub use movie::*;
