/// A post that arrived on a broadcast channel.
///
/// `channel_id` is `@username` for public channels, otherwise the numeric chat
/// id rendered as a string. Not retained after processing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingPost {
    pub channel_id: String,
    pub text: Option<String>,
}

impl IncomingPost {
    pub fn new(channel_id: impl Into<String>, text: Option<&str>) -> Self {
        Self {
            channel_id: channel_id.into(),
            text: text.map(str::to_string),
        }
    }
}

/// Capabilities / feature flags of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub max_message_len: usize,
}
