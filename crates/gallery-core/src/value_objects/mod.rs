//! Value objects - identifiers, flight periods, and permissions

mod campaign_id;
mod flight_period;
mod permissions;
mod user_id;

pub use campaign_id::{CampaignId, CampaignIdParseError};
pub use flight_period::FlightPeriod;
pub use permissions::Permissions;
pub use user_id::{UserId, UserIdParseError};
