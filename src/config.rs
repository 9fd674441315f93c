// Runtime configuration for the lead relay
// Built once at startup and passed into the CRM adapter

/// Origins allowed to submit leads cross-site.
///
/// The last two entries are the Squarespace preview domains used while the
/// marketing sites are being edited.
pub const ALLOWED_ORIGINS: [&str; 8] = [
    "https://longdrivestrategy.com",
    "https://www.longdrivestrategy.com",
    "https://longdrivemarketing.com",
    "https://www.longdrivemarketing.com",
    "https://longdrivepartners.com",
    "https://www.longdrivepartners.com",
    "https://radish-wolf-y8bb.squarespace.com",
    "https://carrot-elk-xmaj.squarespace.com",
];

const DEFAULT_BASE_URL: &str = "https://api.pipedrive.com/v1";

/// Custom field keys assigned by the CRM for deal attributes.
///
/// These are opaque identifiers issued once when the fields were created in
/// the Pipedrive account; they never change at runtime.
#[derive(Debug, Clone)]
pub struct DealFieldKeys {
    pub lead_source: String,
    pub service_need: String,
    pub role: String,
    pub timeline: String,
    pub message: String,
}

impl Default for DealFieldKeys {
    fn default() -> Self {
        Self {
            lead_source: "9c107343e885b33d0227e8c1debdef72a0f6410a".to_string(),
            service_need: "508948e6e7b532d90d201d99f062ced2034c69c7".to_string(),
            role: "985df4be22fe7cf93d47fac0e83848b466e56974".to_string(),
            timeline: "e15b6fe0c06cf4265cb68a9c0d1b91332e7328c3".to_string(),
            message: "4ac5e754fa1a15687ed52b3ebae3c192f9284395".to_string(),
        }
    }
}

/// Immutable CRM configuration
///
/// Constructed once in `main` and handed to the Pipedrive adapter; nothing
/// reads the environment after startup.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    pub api_token: String,
    pub base_url: String,
    pub field_keys: DealFieldKeys,
}

impl CrmConfig {
    /// Loads the configuration from environment variables
    ///
    /// * `PIPEDRIVE_API_TOKEN` - the CRM API token (required in production)
    /// * `PIPEDRIVE_BASE_URL` - override for the CRM base URL (used by tests
    ///   to point the adapter at a local mock server)
    pub fn from_env() -> Self {
        let api_token = std::env::var("PIPEDRIVE_API_TOKEN").unwrap_or_else(|_| {
            tracing::warn!("PIPEDRIVE_API_TOKEN not set, CRM calls will be rejected");
            String::new()
        });

        let base_url =
            std::env::var("PIPEDRIVE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            api_token,
            base_url,
            field_keys: DealFieldKeys::default(),
        }
    }
}
