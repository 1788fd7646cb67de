//! Route path constants.
//!
//! Every path the server mounts or emits in markup comes from here.

/// Application root. Closing the chat navigates here.
pub const ROOT: &str = "/";

/// Full-page chat route.
pub const CHAT: &str = "/chat";

/// Endpoint the chat widget posts to when the user closes it.
pub const CHAT_CLOSE: &str = "/chat/close";

/// Liveness probe.
pub const HEALTH: &str = "/health";

/// Static asset mount point.
pub const STATIC: &str = "/static";
