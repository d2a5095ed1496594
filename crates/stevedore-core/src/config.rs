//! デプロイ設定
//!
//! 環境変数へのアドホックなアクセスではなく、明示的な設定構造体として
//! デプロイパラメータを保持します。アカウントIDが空のまま先へ進むことは
//! ありません。

use crate::error::{ConfigError, Result};

/// デフォルトのAWSリージョン
pub const DEFAULT_REGION: &str = "ap-southeast-1";

/// デフォルトのイメージ名
pub const DEFAULT_IMAGE_NAME: &str = "go-bedrock-app";

/// デフォルトのイメージタグ
pub const DEFAULT_IMAGE_TAG: &str = "latest";

/// アカウントIDを受け取る環境変数名
pub const ACCOUNT_ID_ENV: &str = "ACCOUNT_ID";

/// デプロイ対象を表す設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// AWSリージョン（例: ap-southeast-1）
    pub region: String,

    /// AWSアカウントID（レジストリホスト名とリポジトリ所有者の構成に使用）
    pub account_id: String,

    /// ローカルイメージのリポジトリ名
    pub image_name: String,

    /// イメージタグ
    pub image_tag: String,
}

impl DeployConfig {
    /// 設定を検証して作成
    ///
    /// アカウントIDは前後の空白を除去した上で空でないことを要求します。
    pub fn new(
        account_id: impl Into<String>,
        region: impl Into<String>,
        image_name: impl Into<String>,
        image_tag: impl Into<String>,
    ) -> Result<Self> {
        let account_id = account_id.into().trim().to_string();
        if account_id.is_empty() {
            return Err(ConfigError::MissingAccountId);
        }

        let region = region.into();
        if region.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "リージョンが空です".to_string(),
            ));
        }

        let image_name = image_name.into();
        if image_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "イメージ名が空です".to_string(),
            ));
        }

        let image_tag = image_tag.into();
        if image_tag.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "イメージタグが空です".to_string(),
            ));
        }

        Ok(Self {
            region,
            account_id,
            image_name,
            image_tag,
        })
    }

    /// 環境変数 `ACCOUNT_ID` とデフォルト値から設定を作成
    ///
    /// 環境変数が未設定・空の場合は `ConfigError::MissingAccountId` を
    /// 返します。外部コマンドは一切実行されません。
    pub fn from_env() -> Result<Self> {
        let account_id =
            std::env::var(ACCOUNT_ID_ENV).map_err(|_| ConfigError::MissingAccountId)?;
        tracing::debug!("Loaded account id from {}", ACCOUNT_ID_ENV);
        Self::new(
            account_id,
            DEFAULT_REGION,
            DEFAULT_IMAGE_NAME,
            DEFAULT_IMAGE_TAG,
        )
    }
}
