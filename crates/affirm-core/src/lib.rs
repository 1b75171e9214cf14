pub mod constants;
pub mod controller;
pub mod debounce;
pub mod frame_loop;
pub mod layers;
pub mod particle;
pub mod session;
pub mod surface;
pub mod tuning;

pub use constants::*;
pub use controller::*;
pub use debounce::*;
pub use frame_loop::*;
pub use particle::*;
pub use session::*;
pub use surface::*;
pub use tuning::*;
