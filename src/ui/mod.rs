//! Server-rendered screens.
//!
//! # Structure
//!
//! - [`layout`]: Document shell, page metadata and the chat section layout
//! - [`chat_page`]: The full-page chat screen
//! - [`widget`]: Mounting contract of the `<full-page-chat>` Web Component
//! - [`home`]: Application root

pub mod chat_page;
pub mod home;
pub mod layout;
pub mod widget;

pub use chat_page::ChatPage;
pub use layout::{CHAT_METADATA, ChatLayout, PageMetadata};
pub use widget::{CloseHandler, FullPageChat, FullPageChatProps};
