use dsn::DSN;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlSslMode},
    postgres::{PgConnectOptions, PgSslMode},
};
use std::{path::PathBuf, str::FromStr};

/// TLS configuration for database connections
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    pub mode: TlsMode,
    pub ca: Option<PathBuf>,
    pub cert: Option<PathBuf>,
    pub key: Option<PathBuf>,
}

/// TLS/SSL mode for database connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsMode {
    /// No TLS encryption
    #[default]
    Disable,
    /// TLS required, but no certificate verification
    Require,
    /// Verify server certificate against CA
    VerifyCA,
    /// Verify certificate and hostname
    VerifyFull,
}

impl FromStr for TlsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disable" | "disabled" => Ok(Self::Disable),
            "require" | "required" => Ok(Self::Require),
            "verify-ca" | "verify_ca" => Ok(Self::VerifyCA),
            "verify-full" | "verify_identity" => Ok(Self::VerifyFull),
            _ => Err(format!("Invalid TLS mode: {s}")),
        }
    }
}

impl TlsMode {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disable)
    }
}

impl TlsConfig {
    /// Extract TLS configuration from DSN query parameters
    ///
    /// Supports both PostgreSQL-style and MySQL-style parameter names:
    /// - sslmode, ssl-mode: disable|require|verify-ca|verify-full
    /// - sslrootcert, sslca, ssl-ca: Path to CA certificate
    /// - sslcert, ssl-cert: Path to client certificate
    /// - sslkey, ssl-key: Path to client private key
    #[must_use]
    pub fn from_dsn(dsn: &DSN) -> Self {
        let mode = param(dsn, &["sslmode", "ssl-mode"])
            .and_then(|m| m.parse::<TlsMode>().ok())
            .unwrap_or_default();

        Self {
            mode,
            ca: param(dsn, &["sslrootcert", "sslca", "ssl-ca"]).map(PathBuf::from),
            cert: param(dsn, &["sslcert", "ssl-cert"]).map(PathBuf::from),
            key: param(dsn, &["sslkey", "ssl-key"]).map(PathBuf::from),
        }
    }

    pub(crate) fn apply_postgres(&self, options: PgConnectOptions) -> PgConnectOptions {
        let mut options = match self.mode {
            TlsMode::Disable => options.ssl_mode(PgSslMode::Disable),
            TlsMode::Require => options.ssl_mode(PgSslMode::Require),
            TlsMode::VerifyCA => options.ssl_mode(PgSslMode::VerifyCa),
            TlsMode::VerifyFull => options.ssl_mode(PgSslMode::VerifyFull),
        };

        if let Some(ca) = &self.ca {
            options = options.ssl_root_cert(ca);
        }

        if let (Some(cert), Some(key)) = (&self.cert, &self.key) {
            options = options.ssl_client_cert(cert).ssl_client_key(key);
        }

        options
    }

    pub(crate) fn apply_mysql(&self, options: MySqlConnectOptions) -> MySqlConnectOptions {
        let mut options = match self.mode {
            TlsMode::Disable => options.ssl_mode(MySqlSslMode::Disabled),
            TlsMode::Require => options.ssl_mode(MySqlSslMode::Required),
            TlsMode::VerifyCA => options.ssl_mode(MySqlSslMode::VerifyCa),
            TlsMode::VerifyFull => options.ssl_mode(MySqlSslMode::VerifyIdentity),
        };

        if let Some(ca) = &self.ca {
            options = options.ssl_ca(ca);
        }

        if let (Some(cert), Some(key)) = (&self.cert, &self.key) {
            options = options.ssl_client_cert(cert).ssl_client_key(key);
        }

        options
    }
}

/// First DSN query parameter present among `names`
fn param<'a>(dsn: &'a DSN, names: &[&str]) -> Option<&'a String> {
    names.iter().find_map(|name| dsn.params.get(*name))
}
