pub mod error;

// Legal-aid portal domain modules (canonical locations for all case types)
pub mod case;
pub mod draft;
pub mod steps;

pub use error::*;

// Re-export all domain types
pub use case::*;
pub use draft::*;
pub use steps::*;
