// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod record;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod newton;
pub mod secant;

// driver and presentation
pub mod compare;
pub mod table;
