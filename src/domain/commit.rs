use std::fmt;

const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    pub fn from_reply(reply: &str) -> Self {
        Self(reply.trim().trim_matches(&QUOTE_CHARS[..]).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
