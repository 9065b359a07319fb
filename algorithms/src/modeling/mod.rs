//! Small validated domain types: geometric shapes behind a trait object
//! and employee records whose bonus rule depends on their role.

pub mod employee;
pub mod shapes;

pub use employee::{Employee, Role};
pub use shapes::{Circle, Rectangle, Shape, Triangle};
