pub mod html;
pub mod password;
pub mod slug;

pub use html::*;
pub use password::*;
pub use slug::*;
