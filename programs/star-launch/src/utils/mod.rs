pub mod fixed_point;
pub mod math;
pub mod points;
pub mod token;
pub mod tokenomics;
pub mod validation;
pub mod vesting;

pub use fixed_point::*;
pub use math::*;
pub use points::*;
pub use token::*;
pub use tokenomics::*;
pub use validation::*;
pub use vesting::*;
