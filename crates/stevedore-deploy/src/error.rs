use crate::step::Step;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("ステップ '{step}' が失敗しました (exit: {code:?})\n{stderr}")]
    StepFailed {
        step: Step,
        code: Option<i32>,
        stderr: String,
    },

    #[error("コマンドを起動できません: {program}\n理由: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "ビルド済みイメージが見つかりません: {image}\n\
         ビルドステップが成功しているか確認してください"
    )]
    ImageNotFound { image: String },
}

pub type DeployResult<T> = std::result::Result<T, DeployError>;
