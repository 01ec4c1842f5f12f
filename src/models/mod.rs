pub mod amenity;
pub mod contact;
pub mod destination;
pub mod location;
pub mod property;

pub use amenity::{Amenity, AmenityCategory};
pub use contact::ContactSubmission;
pub use destination::Destination;
pub use location::{Coordinates, Location};
pub use property::{Property, PropertyCategory};
