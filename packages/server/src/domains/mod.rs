// Business domains
pub mod member;
pub mod offers;
pub mod organization;
