//! ECRレジストリのアドレス解決
//!
//! アカウントIDとリージョンからレジストリホスト名を構成し、
//! ローカル／リモートのイメージ参照を組み立てます。

use crate::config::DeployConfig;

/// アカウントIDとリージョンからECRレジストリのホスト名を構成
///
/// # Examples
/// - アカウント `123456789012`、リージョン `ap-southeast-1`
///   -> `123456789012.dkr.ecr.ap-southeast-1.amazonaws.com`
pub fn registry_host(account_id: &str, region: &str) -> String {
    format!("{}.dkr.ecr.{}.amazonaws.com", account_id, region)
}

/// プッシュ先レジストリの解決済みアドレス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryTarget {
    /// レジストリホスト名（例: 123456789012.dkr.ecr.ap-southeast-1.amazonaws.com）
    pub host: String,

    /// リポジトリ名（例: go-bedrock-app）
    pub repository: String,

    /// イメージタグ（例: latest）
    pub tag: String,
}

impl RegistryTarget {
    /// デプロイ設定からレジストリアドレスを解決
    pub fn from_config(config: &DeployConfig) -> Self {
        Self {
            host: registry_host(&config.account_id, &config.region),
            repository: config.image_name.clone(),
            tag: config.image_tag.clone(),
        }
    }

    /// ローカルイメージ参照（レジストリなし）
    ///
    /// 例: `go-bedrock-app:latest`
    pub fn local_image(&self) -> String {
        format!("{}:{}", self.repository, self.tag)
    }

    /// リモートイメージ参照（レジストリ込みの完全修飾名）
    ///
    /// 例: `123456789012.dkr.ecr.ap-southeast-1.amazonaws.com/go-bedrock-app:latest`
    pub fn remote_image(&self) -> String {
        format!("{}/{}:{}", self.host, self.repository, self.tag)
    }
}
