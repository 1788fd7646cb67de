//! Application root page.

use crate::routes;

use super::layout::{HOME_METADATA, document};

/// Landing page with a way into the chat.
pub fn render() -> String {
    document(
        &HOME_METADATA,
        &format!(
            r#"<main id="app" class="flex h-full flex-col items-center justify-center gap-6">
    <h1 class="text-2xl font-bold">Welcome</h1>
    <a href="{chat}" hx-boost="true" class="inline-flex items-center justify-center h-12 px-6 rounded-2xl bg-primary text-white hover:bg-primaryMuted font-medium">
        Start Chatting
    </a>
</main>"#,
            chat = routes::CHAT,
        ),
    )
}
