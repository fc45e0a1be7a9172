pub mod beam;
pub mod orbit;
pub mod spin;
