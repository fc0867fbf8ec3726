// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod config;
pub mod table;
pub(crate) mod signs; 
pub(crate) mod eval;

// algorithms 
pub mod bisection;
pub mod regula_falsi;
pub mod secant;
pub mod newton;
pub mod fixed_point;
pub mod modified_secant;

// one entry point over all of the above
pub mod dispatch;
