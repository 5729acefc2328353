pub mod avatar;
pub mod camera;
pub mod config;
pub mod constants;
pub mod constellation;
pub mod ease;
pub mod orbit;
pub mod particles;
pub mod scroll;

pub use avatar::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use constellation::*;
pub use ease::*;
pub use orbit::*;
pub use particles::*;
pub use scroll::*;
