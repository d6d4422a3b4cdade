pub mod admin;
pub mod assessments;
pub mod auth;
pub mod claims;
pub mod farms;
pub mod overview;
pub mod policies;
pub mod users;
