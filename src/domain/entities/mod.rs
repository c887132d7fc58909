mod link;

pub use link::{NewShortLink, ShortLink, UserId};
