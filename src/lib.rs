pub mod config;
pub mod error;
pub mod lag;
pub mod sleep;
pub mod uniform;

pub use config::{Config, LagSettings};
pub use error::LagError;
pub use lag::{Lag, Window};
pub use sleep::Slumber;
pub use uniform::UniformFraction;
