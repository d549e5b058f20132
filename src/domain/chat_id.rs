/// The Telegram chat that receives contact notifications.
///
/// Either a numeric chat id (negative for groups and channels) or the public
/// `@username` of a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatId(String);

impl ChatId {
    pub fn parse(value: String) -> Result<ChatId, String> {
        let trimmed = value.trim();

        let is_numeric_id = {
            let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
        };

        // Telegram usernames are 5-32 characters of [A-Za-z0-9_]
        let is_channel_username = trimmed.strip_prefix('@').map_or(false, |username| {
            (5..=32).contains(&username.len())
                && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

        if is_numeric_id || is_channel_username {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(format!("{} is not a valid Telegram chat id", value))
        }
    }
}

impl AsRef<str> for ChatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
