pub mod account_io;
pub mod identity_plan;
pub mod math;
pub mod tip_plan;
pub mod transfers;
pub mod validation;

pub use account_io::*;
pub use identity_plan::*;
pub use math::*;
pub use tip_plan::*;
pub use transfers::*;
pub use validation::*;
