pub mod health;
pub mod planet;
pub mod system;

pub use health::{health_check, live, metrics_endpoint, ready};
pub use planet::get_planet;
pub use system::os_info;
