/// Default wait between items (milliseconds)
pub const DEFAULT_DELAY_MS: u64 = 1000;
/// Default user directory endpoint (mock API)
pub const DEFAULT_USERS_ENDPOINT: &str = "https://67f0a9ab2a80b06b889850a1.mockapi.io/api/users";
/// Default HTTP timeout for the user directory fetch (seconds)
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;
/// Well-known preference key for the dark mode flag
pub const DARK_MODE_KEY: &str = "darkMode";
/// Directory name under the user's config dir
pub const APP_DIR_NAME: &str = "sequence-pacer";
/// Preference file name inside [`APP_DIR_NAME`]
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
/// Input used by `run` when no numbers are given
pub const DEFAULT_NUMBERS: &str = "[10, 20, 30, 40]";
