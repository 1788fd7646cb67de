//! The full-page chat widget.
//!
//! The widget itself ships as a Web Component (`<full-page-chat>`) in the
//! static bundle. This side only knows how to mount it and which behaviors it
//! accepts.

use std::fmt;
use std::sync::Arc;

use crate::routes;

/// Custom element tag of the chat widget.
pub const FULL_PAGE_CHAT_TAG: &str = "full-page-chat";

/// DOM event the widget dispatches when the user asks to leave the chat.
pub const CLOSE_EVENT: &str = "close";

/// Zero-argument action invoked when the user closes the chat.
#[derive(Clone)]
pub struct CloseHandler(Arc<dyn Fn() + Send + Sync>);

impl CloseHandler {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Run the action.
    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for CloseHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseHandler")
    }
}

/// Options the chat widget recognises.
#[derive(Debug, Clone)]
pub struct FullPageChatProps {
    /// Invoked when the user requests to leave the chat view.
    pub on_close: CloseHandler,
}

/// Mounted chat widget.
#[derive(Debug, Clone)]
pub struct FullPageChat {
    props: FullPageChatProps,
}

impl FullPageChat {
    #[must_use]
    pub fn new(props: FullPageChatProps) -> Self {
        Self { props }
    }

    /// Render the widget element.
    ///
    /// The close event is posted back to [`routes::CHAT_CLOSE`], where the
    /// server invokes `on_close` on the user's behalf.
    pub fn render(&self) -> String {
        format!(
            r#"<{tag} class="block h-full" hx-post="{close}" hx-trigger="{event}" hx-swap="none"></{tag}>"#,
            tag = FULL_PAGE_CHAT_TAG,
            close = routes::CHAT_CLOSE,
            event = CLOSE_EVENT,
        )
    }

    /// User-initiated close.
    pub fn close(&self) {
        self.props.on_close.call();
    }
}
