pub mod dataset;
pub mod linear;
pub mod training;
pub mod types;

pub use dataset::*;
pub use linear::*;
pub use training::*;
pub use types::*;
