/*
    Top-level
*/

mod cmp;
mod number;
mod numeric;
mod tuple;

pub mod ieee754;
pub use cmp::*;
pub use number::*;
pub use numeric::*;
pub use tuple::*;
