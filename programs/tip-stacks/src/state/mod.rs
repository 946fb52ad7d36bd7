pub mod platform_config;
pub mod platform_treasury;
pub mod tip_stats;
pub mod user_identity;
pub mod username_record;

pub use platform_config::*;
pub use platform_treasury::*;
pub use tip_stats::*;
pub use user_identity::*;
pub use username_record::*;
