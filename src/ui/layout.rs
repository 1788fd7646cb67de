//! Document shell and the chat section layout.

/// Static head metadata for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    /// Document `<title>`.
    pub title: &'static str,
    /// `<meta name="description">` content.
    pub description: &'static str,
}

/// Metadata of the chat route.
pub const CHAT_METADATA: PageMetadata = PageMetadata {
    title: "Chat",
    description: "Chat with the assistant",
};

/// Metadata of the application root.
pub const HOME_METADATA: PageMetadata = PageMetadata {
    title: "Home",
    description: "Application home",
};

/// Wrap `body` in a complete HTML document carrying `meta` in its head.
///
/// Scripts and styles are served locally; no CDN.
pub fn document(meta: &PageMetadata, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark h-full">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{description}">
    <title>{title}</title>

    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script type="module" src="/static/main.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="h-full bg-background text-textPrimary antialiased">
{body}
</body>
</html>"#,
        title = meta.title,
        description = meta.description,
    )
}

/// Layout around every screen of the chat section.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLayout;

impl ChatLayout {
    pub const METADATA: PageMetadata = CHAT_METADATA;

    /// Render `content` unchanged inside a full-height container.
    pub fn render(content: &str) -> String {
        document(
            &Self::METADATA,
            &format!(r#"<div id="chat-layout" class="h-screen">{content}</div>"#),
        )
    }
}
