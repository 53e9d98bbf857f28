pub const CONFIG_DIR_NAME: &str = "bark";
pub const CONFIG_FILENAME: &str = "config.yaml";

pub const CONFIG_DIR_ENV: &str = "BARK_CONFIG_DIR";
pub const API_URL_ENV: &str = "BARK_API_URL";
pub const LOG_ENV: &str = "BARK_LOG";

pub const DEFAULT_API_URL: &str = "https://data.nsldata.com/webAPI.php";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const FUNCTION_PARAM: &str = "function";
pub const MISSION_ID_PARAM: &str = "mission_id";
pub const API_KEY_PARAM: &str = "api_key";
pub const EMAIL_PARAM: &str = "email";
