// Organization domain - owners of volunteer offers
//
// Organizations are created by administrators or fixtures; members act on
// their behalf when posting and editing offers.

pub mod models;

pub use models::*;
