//! Full-page chat screen.

use std::fmt;
use std::sync::Arc;

use crate::navigation::Navigator;
use crate::routes;

use super::widget::{CloseHandler, FullPageChat, FullPageChatProps};

/// Leaf screen mounted inside [`ChatLayout`](super::ChatLayout).
///
/// Renders the chat widget and defines what closing it means here: a
/// navigation request back to the application root.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chat_route::navigation::RecordingNavigator;
/// use chat_route::ui::ChatPage;
///
/// let nav = Arc::new(RecordingNavigator::new());
/// let page = ChatPage::new(nav.clone());
/// page.on_close().call();
/// assert_eq!(nav.calls(), vec!["/".to_string()]);
/// ```
#[derive(Clone)]
pub struct ChatPage {
    navigator: Arc<dyn Navigator>,
}

impl ChatPage {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// The close action handed to the widget.
    pub fn on_close(&self) -> CloseHandler {
        let navigator = Arc::clone(&self.navigator);
        CloseHandler::new(move || navigator.go_to(routes::ROOT))
    }

    /// The widget as mounted by this page.
    pub fn widget(&self) -> FullPageChat {
        FullPageChat::new(FullPageChatProps {
            on_close: self.on_close(),
        })
    }

    pub fn render(&self) -> String {
        self.widget().render()
    }
}

impl fmt::Debug for ChatPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatPage").finish_non_exhaustive()
    }
}
