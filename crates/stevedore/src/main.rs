mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stevedore")]
#[command(about = "積み込む。送り出す。イメージのデプロイは、ひとつのコマンドに。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// イメージをビルドしてECRへデプロイ
    Deploy {
        /// AWSアカウントID
        #[arg(long, env = "ACCOUNT_ID")]
        account_id: Option<String>,
        /// AWSリージョン
        #[arg(long, default_value = stevedore_core::DEFAULT_REGION)]
        region: String,
        /// イメージ名
        #[arg(long, default_value = stevedore_core::DEFAULT_IMAGE_NAME)]
        image: String,
        /// イメージタグ
        #[arg(long, default_value = stevedore_core::DEFAULT_IMAGE_TAG)]
        tag: String,
        /// ビルドコンテキストのディレクトリ
        #[arg(long, default_value = ".")]
        context: PathBuf,
        /// デプロイ前の不要イメージ・ビルドキャッシュ削除をスキップ
        #[arg(long)]
        no_prune: bool,
        /// リポジトリが既に存在してもエラーにせず続行
        #[arg(long)]
        ignore_existing_repo: bool,
        /// 確認なしで実行
        #[arg(short, long)]
        yes: bool,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Deploy {
            account_id,
            region,
            image,
            tag,
            context,
            no_prune,
            ignore_existing_repo,
            yes,
        } => {
            commands::deploy::handle(
                account_id,
                region,
                image,
                tag,
                context,
                no_prune,
                ignore_existing_repo,
                yes,
            )
            .await
        }
        Commands::Version => {
            println!("stevedore {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
