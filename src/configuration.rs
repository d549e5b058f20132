use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{domain::ChatId, telegram_client::TelegramClient};

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Grab the execution directory
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    // Set the configuration directory
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    // Generate the name of the environment-specific config file.
    let environment_filename = format!("{}.yml", environment.as_str());

    // Initialize the configuration reader
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("application.allowed_origins")
                .try_parsing(true),
        )
        // The bot credentials are usually handed over under their own names.
        .set_override_option("telegram.bot_token", std::env::var("TELEGRAM_BOT_TOKEN").ok())?
        .set_override_option("telegram.chat_id", std::env::var("TELEGRAM_CHAT_ID").ok())?
        .build()?;

    let settings = settings.try_deserialize::<Settings>();
    tracing::debug!("Settings values: {:?}", &settings);

    settings
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub telegram: TelegramSettings,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    /// Origins allowed to post the contact form from a browser.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TelegramSettings {
    pub base_url: String,
    pub bot_token: Secret<String>,
    pub chat_id: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl TelegramSettings {
    /// Build the notification channel client, refusing incomplete credentials.
    pub fn client(self) -> Result<TelegramClient, anyhow::Error> {
        if self.bot_token.expose_secret().trim().is_empty() {
            anyhow::bail!("The Telegram bot token is empty");
        }
        let chat_id = self.chat_id().map_err(anyhow::Error::msg)?;
        let timeout = self.timeout();
        let client = TelegramClient::new(self.base_url, self.bot_token, chat_id, timeout)?;
        Ok(client)
    }

    pub fn chat_id(&self) -> Result<ChatId, String> {
        ChatId::parse(self.chat_id.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

/// The possible runtime environments for this application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'",
                other
            )),
        }
    }
}
