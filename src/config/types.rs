use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PENDING_TEMPLATE: &str = "Started build of {{Owner}}/{{Repo}} from {{Target}}";
pub const DEFAULT_ERROR_TEMPLATE: &str = "Error during build of {{Owner}}/{{Repo}} from {{Target}}";
pub const DEFAULT_FAILURE_TEMPLATE: &str =
    "Failure during build of {{Owner}}/{{Repo}} from {{Target}}";
pub const DEFAULT_SUCCESS_TEMPLATE: &str =
    "Success after build of {{Owner}}/{{Repo}} from {{Target}}";
pub const DEFAULT_RESULT_ROOT: &str = "/var/tmp/hookrelay";
pub const DEFAULT_HIPCHAT_URL: &str = "https://api.hipchat.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// One `config.toml` as found on disk
///
/// Every field is optional: the global file and each per-repository file are
/// layered, and anything still unset falls back to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub result_root: Option<PathBuf>,
    pub pending_template: Option<String>,
    pub error_template: Option<String>,
    pub failure_template: Option<String>,
    pub success_template: Option<String>,
    pub hipchat_token: Option<String>,
    pub hipchat_room: Option<String>,
    pub hipchat_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Layer `self` over `base`; set values in `self` win
    pub fn over(self, base: FileConfig) -> FileConfig {
        FileConfig {
            result_root: self.result_root.or(base.result_root),
            pending_template: self.pending_template.or(base.pending_template),
            error_template: self.error_template.or(base.error_template),
            failure_template: self.failure_template.or(base.failure_template),
            success_template: self.success_template.or(base.success_template),
            hipchat_token: self.hipchat_token.or(base.hipchat_token),
            hipchat_room: self.hipchat_room.or(base.hipchat_room),
            hipchat_url: self.hipchat_url.or(base.hipchat_url),
            timeout_secs: self.timeout_secs.or(base.timeout_secs),
            log_level: self.log_level.or(base.log_level),
        }
    }
}

/// Fully resolved settings for processing one hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub pending_template: String,
    pub error_template: String,
    pub failure_template: String,
    pub success_template: String,
    pub hipchat_token: String,
    pub hipchat_room: String,
    pub hipchat_url: String,
    pub timeout_secs: u64,
    pub result_root: PathBuf,
    pub log_level: String,
}

impl EffectiveConfig {
    /// True when both chat credentials are present
    pub fn has_chat_credentials(&self) -> bool {
        !self.hipchat_token.is_empty() && !self.hipchat_room.is_empty()
    }

    /// Copy with the token masked, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.hipchat_token.is_empty() {
            copy.hipchat_token = "********".to_string();
        }
        copy
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        FileConfig::default().into()
    }
}

impl From<FileConfig> for EffectiveConfig {
    fn from(file: FileConfig) -> Self {
        EffectiveConfig {
            pending_template: file
                .pending_template
                .unwrap_or_else(|| DEFAULT_PENDING_TEMPLATE.to_string()),
            error_template: file
                .error_template
                .unwrap_or_else(|| DEFAULT_ERROR_TEMPLATE.to_string()),
            failure_template: file
                .failure_template
                .unwrap_or_else(|| DEFAULT_FAILURE_TEMPLATE.to_string()),
            success_template: file
                .success_template
                .unwrap_or_else(|| DEFAULT_SUCCESS_TEMPLATE.to_string()),
            hipchat_token: file.hipchat_token.unwrap_or_default(),
            hipchat_room: file.hipchat_room.unwrap_or_default(),
            hipchat_url: file
                .hipchat_url
                .unwrap_or_else(|| DEFAULT_HIPCHAT_URL.to_string()),
            timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            result_root: file
                .result_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_ROOT)),
            log_level: file
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
