//! デプロイステップの語彙
//!
//! 7つのステップは文書化された順序で固定されており、並べ替え・省略は
//! ありません（pruneのみ明示的なオプションでスキップ可能）。

use std::fmt;

/// デプロイパイプラインの1ステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// 未使用のローカルイメージとビルドキャッシュを削除
    Prune,
    /// ビルドコンテキストからイメージをビルド
    Build,
    /// ECRレジストリへのdockerログイン
    Login,
    /// ビルド済みイメージのIDを取得
    ImageId,
    /// リモートレジストリ向けのタグを付与
    Tag,
    /// リモートリポジトリを作成
    CreateRepository,
    /// イメージをレジストリへプッシュ
    Push,
}

impl Step {
    /// 文書化された実行順序
    pub const ALL: [Step; 7] = [
        Step::Prune,
        Step::Build,
        Step::Login,
        Step::ImageId,
        Step::Tag,
        Step::CreateRepository,
        Step::Push,
    ];

    /// 進捗表示用の説明文
    pub fn description(&self) -> &'static str {
        match self {
            Step::Prune => "未使用イメージとビルドキャッシュを削除中...",
            Step::Build => "イメージをビルド中...",
            Step::Login => "レジストリにログイン中...",
            Step::ImageId => "イメージIDを取得中...",
            Step::Tag => "リモート向けタグを付与中...",
            Step::CreateRepository => "リモートリポジトリを作成中...",
            Step::Push => "イメージをプッシュ中...",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Step::Prune => "prune",
            Step::Build => "build",
            Step::Login => "login",
            Step::ImageId => "image-id",
            Step::Tag => "tag",
            Step::CreateRepository => "create-repository",
            Step::Push => "push",
        };
        write!(f, "{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_ids() {
        assert_eq!(Step::Prune.to_string(), "prune");
        assert_eq!(Step::CreateRepository.to_string(), "create-repository");
        assert_eq!(Step::ImageId.to_string(), "image-id");
    }

    #[test]
    fn test_all_has_documented_order() {
        assert_eq!(Step::ALL.len(), 7);
        assert_eq!(Step::ALL[0], Step::Prune);
        assert_eq!(Step::ALL[6], Step::Push);
    }
}
