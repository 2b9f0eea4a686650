pub mod status_venue;
pub mod venue;

pub use status_venue::StatusVenue;
pub use venue::{Venue, VenueBaru, VenuePatch};
