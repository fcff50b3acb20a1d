//! Pure numeric core: descriptive statistics, Pearson correlation and the
//! all-pairs correlation matrix. Nothing in here holds state.

pub mod correlation;
pub mod descriptive;
pub mod matrix;

pub use correlation::*;
pub use descriptive::*;
pub use matrix::*;
