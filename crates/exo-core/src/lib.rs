pub mod armor;
pub mod camera;
pub mod card;
pub mod config;
pub mod configurator;
pub mod constants;
pub mod gesture;
pub mod landmark;
pub mod naming;
pub mod suit;

pub use camera::*;
pub use config::*;
pub use configurator::*;
pub use gesture::*;
pub use landmark::*;
pub use naming::*;
pub use suit::*;
