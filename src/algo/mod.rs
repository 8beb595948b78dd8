//! Mesh processing algorithms.
//!
//! - **Parameterization**: fixed-border maps of discs onto convex shapes with
//!   mean-value, uniform, cotangent or authalic weights

pub mod parameterize;
