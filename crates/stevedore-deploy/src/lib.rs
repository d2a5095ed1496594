//! Stevedore Deploy — イメージのビルド・タグ付け・プッシュのパイプライン
//!
//! `docker` と `aws` のCLIを外部プロセスとして順番に呼び出し、
//! ローカルでビルドしたイメージをECRへデプロイします。各ステップの
//! 終了ステータスは必ず検査され、失敗した時点で残りのステップは
//! 中断されます。

pub mod error;
pub mod pipeline;
pub mod runner;
pub mod step;

pub use error::{DeployError, DeployResult};
pub use pipeline::{DeployOptions, DeployPipeline, ExistingRepository};
pub use runner::{CommandRunner, SystemRunner};
pub use step::Step;
