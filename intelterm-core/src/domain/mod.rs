//! Plain data types shared by the application layer and the terminal UI

pub mod input;
pub mod message;
pub mod session;
pub mod theme;

pub use input::InputLine;
pub use message::{Message, MessageId, MessageIdGen, MessageKind};
pub use session::SessionId;
pub use theme::ThemeName;
