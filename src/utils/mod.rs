// Utility functions
// Helper functions for common operations

pub mod initials;

pub use initials::initials_of;
