// Storage access and the profile record
// Components reach storage only through the capability in `storage`

pub mod storage;
pub mod user_profile;
