// UI Components
// Presentational pieces of the profile page

pub mod profile_card;
pub mod verification_badge;

pub use profile_card::ProfileCard;
pub use verification_badge::VerificationBadge;
