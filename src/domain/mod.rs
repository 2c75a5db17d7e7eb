mod error;
mod gateways;
mod location;
mod shift;

pub use error::*;
pub use gateways::*;
pub use location::*;
pub use shift::*;
