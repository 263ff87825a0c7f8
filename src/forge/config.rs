//! Configuration for the forge platform connection.
use secrecy::SecretString;

/// Default forge host.
pub const DEFAULT_HOST: &str = "github.com";
/// Page size for the single-page release listing.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote connection configuration for authenticating against the forge.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            scheme: "https".to_string(),
            owner: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}
