use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::mail::{DEFAULT_CORRELATION_KEY, DEFAULT_SUBJECT, MailSettings};

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the external AI chat service
    #[arg(long, env = "AI_CHAT_URL")]
    pub chat_url: Option<String>,

    /// Support address used by email triggers
    #[arg(long, env = "SUPPORT_EMAIL")]
    pub support_email: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub support: SupportConfig,
    pub chat: ChatConfig,
    pub thread: ThreadConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Origin used in deep links; derived from the `Host` header when unset.
    pub public_origin: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupportConfig {
    pub email: String,
    pub subject: String,
    pub correlation_key: String,
}

impl SupportConfig {
    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            subject: self.subject.clone(),
            correlation_key: self.correlation_key.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThreadConfig {
    /// HTMX polling trigger for open threads; empty disables polling.
    pub poll: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("support.email", "support@meetingbaas.com")?
            .set_default("support.subject", DEFAULT_SUBJECT)?
            .set_default("support.correlation_key", DEFAULT_CORRELATION_KEY)?
            .set_default("chat.base_url", "https://chat.meetingbaas.com")?
            .set_default("thread.poll", "every 5s")?;

        // 2. Config file: explicit path, else ./config.yaml when present
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::with_name(CWD_CONFIG_FILE));
        }

        // 3. Environment variables, e.g. REPORTS_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("REPORTS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (and their plain env aliases) win
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.chat_url {
            builder = builder.set_override("chat.base_url", url)?;
        }
        if let Some(email) = cli.support_email {
            builder = builder.set_override("support.email", email)?;
        }

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// Polling trigger for rendered threads, `None` when disabled.
    pub fn poll_trigger(&self) -> Option<&str> {
        let poll = self.thread.poll.trim();
        (!poll.is_empty()).then_some(poll)
    }
}
