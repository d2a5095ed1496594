use colored::Colorize;
use std::path::PathBuf;
use stevedore_core::{DeployConfig, RegistryTarget};
use stevedore_deploy::{DeployOptions, DeployPipeline, ExistingRepository, SystemRunner};

#[allow(clippy::too_many_arguments)]
pub async fn handle(
    account_id: Option<String>,
    region: String,
    image: String,
    tag: String,
    context: PathBuf,
    no_prune: bool,
    ignore_existing_repo: bool,
    yes: bool,
) -> anyhow::Result<()> {
    println!("{}", "デプロイを開始します...".blue().bold());

    // 設定の検証（アカウントID未指定はここで止まる。外部コマンドは実行されない）
    let config = DeployConfig::new(account_id.unwrap_or_default(), region, image, tag)?;
    let target = RegistryTarget::from_config(&config);
    tracing::debug!("Deploy config: {:?}", config);

    println!();
    println!("{}", "デプロイ対象:".bold());
    println!("  リージョン:   {}", config.region.cyan());
    println!("  アカウント:   {}", config.account_id.cyan());
    println!("  イメージ:     {}", target.local_image().cyan());
    println!("  プッシュ先:   {}", target.remote_image().cyan());
    println!("  コンテキスト: {}", context.display());

    // 確認（--yesが指定されていない場合）
    if !yes {
        println!();
        if !no_prune {
            println!(
                "{}",
                "警告: 未使用のローカルイメージとビルドキャッシュをすべて削除します。".yellow()
            );
        }
        println!("実行するには --yes オプションを指定してください");
        return Ok(());
    }

    let options = DeployOptions {
        prune: !no_prune,
        context,
        on_existing_repository: if ignore_existing_repo {
            ExistingRepository::Ignore
        } else {
            ExistingRepository::Fail
        },
    };

    let mut runner = SystemRunner::new();
    DeployPipeline::with_options(&config, options).run(&mut runner)?;
    Ok(())
}
