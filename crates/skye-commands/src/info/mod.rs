//! Interactive user info card.
//!
//! `/userinfo` sends a card with a dropdown offering four views of the
//! subject. Each selection re-renders the card; only the user who ran the
//! command may change it, and the dropdown is disabled once it has been idle
//! for the configured timeout.

pub mod menu;
pub mod render;
pub mod session;
pub mod subject;
pub mod userinfo;
pub mod view;

pub use render::render;
pub use session::{IdleDeadline, InfoError, InfoSession, SessionState};
pub use subject::{Avatar, Subject};
pub use userinfo::userinfo;
pub use view::InfoView;
