//! Core modules with math and trait types/functions.
pub mod math;
pub mod traits;
