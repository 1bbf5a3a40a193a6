// One pure formula per protocol family. Each takes the price ratio
// (new price / entry price) and returns the LP value multiplier, plus
// whatever auxiliary metrics the family exposes.

pub mod algebra;
pub mod concentrated;
pub mod constant_product;
pub mod gmx;
pub mod stableswap;
pub mod ve33;
pub mod weighted;
