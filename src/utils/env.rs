//! Runtime environment detection.
//!
//! Reads `APP_ENV` for the deployment environment, recognizes common CI
//! markers, and exposes TTY checks for output-mode decisions.

use std::io::IsTerminal;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

/// Detect the current environment from `APP_ENV`. Absent or unrecognized
/// values fall back to `Development`.
pub fn detect() -> Environment {
    std::env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Environment::Development)
}

/// True when a truthy `CI` variable is set (GitHub Actions, GitLab,
/// CircleCI, and most other providers export `CI=true`).
pub fn is_ci() -> bool {
    env_flag("CI")
}

/// Interpret an environment variable as a boolean flag.
/// `1`, `true`, `yes`, and `on` (any case) are truthy; everything else,
/// including an unset variable, is falsy.
pub fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => false,
    }
}

pub fn is_stdout_tty() -> bool {
    std::io::stdout().is_terminal()
}

pub fn is_stderr_tty() -> bool {
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn as_str_roundtrips() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Production,
        ] {
            assert_eq!(env.as_str().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn env_flag_parses_truthy_forms() {
        // Set/remove a uniquely named variable to avoid crosstalk with
        // other tests reading the real CI variable.
        std::env::set_var("ODDJOB_TEST_FLAG", "yes");
        assert!(env_flag("ODDJOB_TEST_FLAG"));
        std::env::set_var("ODDJOB_TEST_FLAG", "0");
        assert!(!env_flag("ODDJOB_TEST_FLAG"));
        std::env::remove_var("ODDJOB_TEST_FLAG");
        assert!(!env_flag("ODDJOB_TEST_FLAG"));
    }
}
