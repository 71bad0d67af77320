use std::{
    env, fs,
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};

use crate::{errors::Error, Result};

const DEFAULT_LIVENESS_PORT: u16 = 8080;

/// Typed configuration for the relay bot.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,

    // Telegram limits
    pub telegram_safe_limit: usize,

    // Liveness endpoint
    pub liveness_enabled: bool,
    pub liveness_addr: SocketAddr,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let telegram_safe_limit = env_usize("TELEGRAM_SAFE_LIMIT").unwrap_or(4000);

        let liveness_enabled = env_bool("LIVENESS_ENABLED").unwrap_or(true);
        let liveness_addr = match env_str("LIVENESS_ADDR").and_then(non_empty) {
            Some(raw) => parse_socket_addr(&raw)?,
            None => default_liveness_addr(),
        };

        Ok(Self {
            telegram_bot_token,
            telegram_safe_limit,
            liveness_enabled,
            liveness_addr,
        })
    }
}

pub fn default_liveness_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_LIVENESS_PORT))
}

fn parse_socket_addr(raw: &str) -> Result<SocketAddr> {
    raw.trim()
        .parse::<SocketAddr>()
        .map_err(|e| Error::Config(format!("LIVENESS_ADDR is not a socket address ({raw}): {e}")))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn env_bool(key: &str) -> Option<bool> {
    env_str(key).map(|s| {
        matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_skips_comments_and_strips_quotes() {
        let parsed = parse_dotenv(
            "# token\nTELEGRAM_BOT_TOKEN=\"123:abc\"\n\nexport LIVENESS_ADDR='127.0.0.1:9000'\nbroken line\n=novalue\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("TELEGRAM_BOT_TOKEN".to_string(), "123:abc".to_string()),
                ("LIVENESS_ADDR".to_string(), "127.0.0.1:9000".to_string()),
            ]
        );
    }

    #[test]
    fn default_liveness_listens_on_all_interfaces() {
        assert_eq!(default_liveness_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn rejects_malformed_liveness_addr() {
        assert!(parse_socket_addr("127.0.0.1:9000").is_ok());
        assert!(matches!(
            parse_socket_addr("localhost"),
            Err(Error::Config(_))
        ));
    }
}
