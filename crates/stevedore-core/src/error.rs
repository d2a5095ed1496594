use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "アカウントIDが設定されていません\n\
         ACCOUNT_ID 環境変数、または --account-id オプションで指定してください"
    )]
    MissingAccountId,

    #[error("無効な設定: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
