//! デプロイパイプライン
//!
//! prune → build → login → image-id → tag → create-repository → push の
//! 7ステップを文書化された順序で実行します。各ステップの終了ステータスは
//! 検査され、失敗した時点で残りは中断されます。

use crate::error::{DeployError, DeployResult};
use crate::runner::CommandRunner;
use crate::step::Step;
use colored::Colorize;
use std::path::PathBuf;
use stevedore_core::{DeployConfig, RegistryTarget};

/// create-repository が「既に存在する」エラーを返したときの扱い
///
/// デフォルトはFail。再実行を許容するかどうかは呼び出し側が明示的に
/// 選択します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingRepository {
    /// エラーとして中断する
    #[default]
    Fail,
    /// 既存リポジトリを再利用して続行する
    Ignore,
}

/// ECRの「リポジトリが既に存在する」エラーコード
const REPOSITORY_EXISTS_MARKER: &str = "RepositoryAlreadyExistsException";

/// パイプラインの実行オプション
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// デプロイ前にローカルの未使用イメージとビルドキャッシュを削除する
    pub prune: bool,

    /// ビルドコンテキストのディレクトリ
    pub context: PathBuf,

    /// 既存リポジトリの扱い
    pub on_existing_repository: ExistingRepository,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            prune: true,
            context: PathBuf::from("."),
            on_existing_repository: ExistingRepository::default(),
        }
    }
}

/// ビルド・タグ付け・プッシュを実行するパイプライン
pub struct DeployPipeline<'a> {
    config: &'a DeployConfig,
    options: DeployOptions,
}

impl<'a> DeployPipeline<'a> {
    /// デフォルトオプションでパイプラインを作成
    pub fn new(config: &'a DeployConfig) -> Self {
        Self::with_options(config, DeployOptions::default())
    }

    pub fn with_options(config: &'a DeployConfig, options: DeployOptions) -> Self {
        Self { config, options }
    }

    /// 7ステップを順番に実行し、成功時はリモートイメージ参照を返す
    pub fn run(&self, runner: &mut dyn CommandRunner) -> DeployResult<String> {
        let target = RegistryTarget::from_config(self.config);
        let local_image = target.local_image();
        let remote_image = target.remote_image();

        // 1. prune（破壊的。--no-pruneでスキップ可能）
        self.banner(1, Step::Prune);
        if self.options.prune {
            runner.run(Step::Prune, "docker", &["system", "prune", "--all", "--force"])?;
        } else {
            println!("  - スキップ (--no-prune)");
        }

        // 2. build
        self.banner(2, Step::Build);
        let context = self.options.context.display().to_string();
        runner.run(
            Step::Build,
            "docker",
            &["build", "-t", local_image.as_str(), context.as_str()],
        )?;

        // 3. login（認証情報はstdin経由のみ。argvには載せない）
        self.banner(3, Step::Login);
        let password = runner.capture(
            Step::Login,
            "aws",
            &[
                "ecr",
                "get-login-password",
                "--region",
                self.config.region.as_str(),
            ],
        )?;
        runner.run_with_stdin(
            Step::Login,
            "docker",
            &[
                "login",
                "--username",
                "AWS",
                "--password-stdin",
                target.host.as_str(),
            ],
            password.trim_end(),
        )?;

        // 4. image id（前後の空白を除去し、そのままtagの引数に使う）
        self.banner(4, Step::ImageId);
        let raw_id =
            runner.capture(Step::ImageId, "docker", &["images", "-q", local_image.as_str()])?;
        let image_id = raw_id.trim().to_string();
        if image_id.is_empty() {
            return Err(DeployError::ImageNotFound { image: local_image });
        }
        println!("  ✓ {}", image_id.cyan());

        // 5. tag
        self.banner(5, Step::Tag);
        runner.run(
            Step::Tag,
            "docker",
            &["tag", image_id.as_str(), remote_image.as_str()],
        )?;

        // 6. create-repository
        self.banner(6, Step::CreateRepository);
        let create_result = runner.run(
            Step::CreateRepository,
            "aws",
            &[
                "ecr",
                "create-repository",
                "--registry-id",
                self.config.account_id.as_str(),
                "--repository-name",
                self.config.image_name.as_str(),
            ],
        );
        match create_result {
            Ok(()) => {}
            Err(DeployError::StepFailed { ref stderr, .. })
                if self.options.on_existing_repository == ExistingRepository::Ignore
                    && stderr.contains(REPOSITORY_EXISTS_MARKER) =>
            {
                println!(
                    "  - リポジトリは既に存在します: {}",
                    self.config.image_name.cyan()
                );
            }
            Err(e) => return Err(e),
        }

        // 7. push
        self.banner(7, Step::Push);
        runner.run(Step::Push, "docker", &["push", remote_image.as_str()])?;

        println!();
        println!("{} {}", "✓ デプロイ完了:".green().bold(), remote_image.cyan());
        Ok(remote_image)
    }

    fn banner(&self, n: usize, step: Step) {
        println!();
        println!(
            "{}",
            format!("【Step {}/7】{}", n, step.description()).yellow()
        );
    }
}
