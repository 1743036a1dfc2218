use std::time::Duration;

/// Configures per-attempt timeout, retry budget and backoff ceiling.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Ceiling for the exponential backoff delay.
    pub max_backoff: Duration,
    /// Maximum number of attempts. Zero means no attempt is made.
    pub max_retries: u32,
    /// Deadline for connecting and for the whole exchange of one attempt.
    ///
    /// Keep this low: failed attempts are retried with backoff anyway.
    pub timeout: Duration,
    /// Accept invalid TLS certificates.
    pub skip_tls_verification: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_backoff: Duration::from_secs(5),
            max_retries: 15,
            timeout: Duration::from_secs(2),
            skip_tls_verification: false,
        }
    }
}

impl ClientOptions {
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_skip_tls_verification(mut self, skip: bool) -> Self {
        self.skip_tls_verification = skip;
        self
    }

    /// Builds options from defaults overridden by environment variables.
    ///
    /// Reads (all optional):
    /// - `FETCH_RETRY_TIMEOUT_MS` — per-attempt timeout in milliseconds
    /// - `FETCH_RETRY_MAX_RETRIES` — retry budget
    /// - `FETCH_RETRY_MAX_BACKOFF_MS` — backoff ceiling in milliseconds
    /// - `FETCH_RETRY_SKIP_TLS_VERIFY` — `true`/`false`, `1`/`0`, `yes`/`no`
    ///
    /// Returns an error naming the variable if a value cannot be parsed.
    ///
    /// **Not available on `wasm32` targets.**
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> std::result::Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> std::result::Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, "FETCH_RETRY_TIMEOUT_MS")? {
            options.timeout = Duration::from_millis(ms);
        }
        if let Some(retries) = parse_var::<u32>(&lookup, "FETCH_RETRY_MAX_RETRIES")? {
            options.max_retries = retries;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "FETCH_RETRY_MAX_BACKOFF_MS")? {
            options.max_backoff = Duration::from_millis(ms);
        }
        if let Some(raw) = lookup("FETCH_RETRY_SKIP_TLS_VERIFY") {
            options.skip_tls_verification = parse_flag(&raw).ok_or_else(|| {
                format!("FETCH_RETRY_SKIP_TLS_VERIFY has invalid boolean value '{raw}'")
            })?;
        }

        Ok(options)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> std::result::Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| format!("{key} has invalid value '{raw}': {err}")),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use super::ClientOptions;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.max_backoff, Duration::from_secs(5));
        assert_eq!(options.max_retries, 15);
        assert_eq!(options.timeout, Duration::from_secs(2));
        assert!(!options.skip_tls_verification);
    }

    #[test]
    fn builder_accepts_zero_retries() {
        let options = ClientOptions::default()
            .with_max_retries(0)
            .with_timeout(Duration::from_millis(100));
        assert_eq!(options.max_retries, 0);
        assert_eq!(options.timeout, Duration::from_millis(100));
    }

    #[test]
    fn lookup_without_variables_keeps_defaults() {
        let options = ClientOptions::from_lookup(lookup_from(&[])).expect("defaults must parse");
        assert_eq!(options, ClientOptions::default());
    }

    #[test]
    fn lookup_overrides_each_field() {
        let options = ClientOptions::from_lookup(lookup_from(&[
            ("FETCH_RETRY_TIMEOUT_MS", "250"),
            ("FETCH_RETRY_MAX_RETRIES", "3"),
            ("FETCH_RETRY_MAX_BACKOFF_MS", " 1000 "),
            ("FETCH_RETRY_SKIP_TLS_VERIFY", "Yes"),
        ]))
        .expect("overrides must parse");

        assert_eq!(options.timeout, Duration::from_millis(250));
        assert_eq!(options.max_retries, 3);
        assert_eq!(options.max_backoff, Duration::from_secs(1));
        assert!(options.skip_tls_verification);
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = ClientOptions::from_lookup(lookup_from(&[("FETCH_RETRY_MAX_RETRIES", "-1")]))
            .expect_err("negative retries must fail");
        assert!(err.contains("FETCH_RETRY_MAX_RETRIES"));

        let err =
            ClientOptions::from_lookup(lookup_from(&[("FETCH_RETRY_SKIP_TLS_VERIFY", "maybe")]))
                .expect_err("unknown flag must fail");
        assert!(err.contains("FETCH_RETRY_SKIP_TLS_VERIFY"));
    }
}
