//! Stevedore Core — デプロイ設定とレジストリアドレスのモデル
//!
//! デプロイ対象（リージョン、アカウントID、イメージ名、タグ）を
//! 明示的な設定構造体として表現し、ECRレジストリのアドレス解決を提供します。

pub mod config;
pub mod error;
pub mod registry;

pub use config::*;
pub use error::*;
pub use registry::*;
