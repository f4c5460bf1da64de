//! Math kernel families.

pub mod dot_product;
pub mod matvec;
