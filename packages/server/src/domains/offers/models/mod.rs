pub mod offer;
pub mod offer_volunteer;
pub mod status;

pub use offer::*;
pub use offer_volunteer::*;
pub use status::*;
