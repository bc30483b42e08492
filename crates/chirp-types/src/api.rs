use serde::Deserialize;

/// Body of `PATCH /messages/{id}`.
///
/// Clients usually send a whole message object; everything except `text`
/// is ignored. A missing `text` decodes as empty and is rejected later.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateMessageRequest {
    pub text: String,
}
