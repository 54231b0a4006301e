//! Installer languages and their prompt text.

/// Language used for prompts and written to `LANGUAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    TraditionalChinese,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::TraditionalChinese];

    /// Value written to the environment file.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::TraditionalChinese => "zh-hant",
        }
    }

    /// Parse a menu answer: `1`/`2` or the language code itself.
    pub fn from_choice(answer: &str) -> Option<Language> {
        match answer.trim().to_lowercase().as_str() {
            "1" | "en" => Some(Language::English),
            "2" | "zh-hant" => Some(Language::TraditionalChinese),
            _ => None,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::English => &ENGLISH,
            Language::TraditionalChinese => &TRADITIONAL_CHINESE,
        }
    }
}

/// Shown before a language is known.
pub const LANGUAGE_MENU: &str = "What's your language? / 請選擇語言\n  1) en\n  2) zh-hant";
pub const LANGUAGE_PROMPT: &str = "Enter 1 or 2 / 請輸入 1 或 2";

/// Prompt and status text for one language.
#[derive(Debug)]
pub struct Messages {
    pub existing_install: &'static str,
    pub start_existing: &'static str,
    pub reconfigure: &'static str,
    pub cancel: &'static str,
    pub backup_data_dirs: &'static str,
    pub domain: &'static str,
    pub domain_kept: &'static str,
    pub http_port: &'static str,
    pub invalid_port: &'static str,
    pub ssl_email: &'static str,
    pub customize_database: &'static str,
    pub database_root_password: &'static str,
    pub database_name: &'static str,
    pub database_user: &'static str,
    pub database_password: &'static str,
    pub admin_user: &'static str,
    pub admin_password: &'static str,
    pub admin_password_confirm: &'static str,
    pub password_mismatch: &'static str,
    pub generated_password: &'static str,
    pub backed_up: &'static str,
    pub env_written: &'static str,
    pub proxy_written: &'static str,
    pub start_now: &'static str,
    pub starting: &'static str,
    pub started: &'static str,
    pub orchestrator_missing: &'static str,
    pub start_manually: &'static str,
}

static ENGLISH: Messages = Messages {
    existing_install: "An existing installation was found. What would you like to do?",
    start_existing: "Start the existing stack",
    reconfigure: "Reconfigure",
    cancel: "Cancel",
    backup_data_dirs: "Back up existing database data? New credentials will not match it",
    domain: "Site domain (blank for none)",
    domain_kept: "Note: no domain entered; the previous domain and proxy config stay in place:",
    http_port: "HTTP port",
    invalid_port: "  ✗ Port must be a number between 1 and 65535.",
    ssl_email: "Email for SSL certificates (optional)",
    customize_database: "Customize MySQL settings?",
    database_root_password: "MYSQL_ROOT_PASSWORD (blank to generate)",
    database_name: "MYSQL_DATABASE (blank to keep default)",
    database_user: "MYSQL_USER (blank to keep default)",
    database_password: "MYSQL_PASSWORD (blank to generate)",
    admin_user: "ADMIN_LOGIN_USER",
    admin_password: "ADMIN_LOGIN_PASSWORD (blank to generate)",
    admin_password_confirm: "Confirm password",
    password_mismatch: "  ✗ Passwords do not match, please try again.",
    generated_password: "  → Generated password:",
    backed_up: "Backed up",
    env_written: "✅ Environment file written:",
    proxy_written: "✅ Proxy configuration written:",
    start_now: "Start the stack now?",
    starting: "Starting the stack...",
    started: "✅ Stack started",
    orchestrator_missing: "⚠️  No container orchestrator found.",
    start_manually: "Start the stack manually with:",
};

static TRADITIONAL_CHINESE: Messages = Messages {
    existing_install: "偵測到既有安裝，要如何處理？",
    start_existing: "直接啟動既有服務",
    reconfigure: "重新設定",
    cancel: "取消",
    backup_data_dirs: "是否備份既有資料庫資料？新密碼將無法存取舊資料",
    domain: "網站網址 (domain，可留空)",
    domain_kept: "注意：未輸入網址，先前設定的網址與反向代理設定將維持不變：",
    http_port: "請輸入 Port",
    invalid_port: "  ✗ Port 必須是 1 到 65535 之間的數字。",
    ssl_email: "SSL 憑證通知信箱 (可留空)",
    customize_database: "是否要修改 MySQL 參數？",
    database_root_password: "MYSQL_ROOT_PASSWORD (留空自動產生)",
    database_name: "MYSQL_DATABASE (留空保留範例)",
    database_user: "MYSQL_USER (留空保留範例)",
    database_password: "MYSQL_PASSWORD (留空自動產生)",
    admin_user: "ADMIN_LOGIN_USER",
    admin_password: "ADMIN_LOGIN_PASSWORD (留空自動產生)",
    admin_password_confirm: "請再次輸入密碼確認",
    password_mismatch: "  ✗ 兩次不一致，請重新輸入。",
    generated_password: "  → 隨機產生：",
    backed_up: "已備份",
    env_written: "✅ 環境設定檔建立完成：",
    proxy_written: "✅ 反向代理設定建立完成：",
    start_now: "是否立即啟動服務？",
    starting: "開始啟動服務...",
    started: "✅ 服務已啟動",
    orchestrator_missing: "⚠️  找不到容器編排工具。",
    start_manually: "請手動執行：",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_numbers_and_codes() {
        assert_eq!(Language::from_choice("1"), Some(Language::English));
        assert_eq!(Language::from_choice(" 2 "), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_choice("ZH-HANT"), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_choice("en"), Some(Language::English));
    }

    #[test]
    fn rejects_blank_and_unknown_choices() {
        assert_eq!(Language::from_choice(""), None);
        assert_eq!(Language::from_choice("3"), None);
        assert_eq!(Language::from_choice("fr"), None);
    }

    #[test]
    fn codes_match_environment_values() {
        let codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "zh-hant"]);
    }
}
