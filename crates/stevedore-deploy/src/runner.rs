//! 外部コマンドの実行
//!
//! パイプラインとOSの間の継ぎ目。`CommandRunner` トレイトを介して
//! 呼び出すことで、テストではコマンド構築と実行順序を記録スタブで
//! 検証できます。

use crate::error::{DeployError, DeployResult};
use crate::step::Step;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// 外部プロセスを起動するための抽象
///
/// すべてのメソッドはプロセスの終了を待ち、終了ステータスを検査します。
/// 非ゼロ終了は `DeployError::StepFailed` になります。
pub trait CommandRunner {
    /// コマンドを実行して終了を待つ
    fn run(&mut self, step: Step, program: &str, args: &[&str]) -> DeployResult<()>;

    /// コマンドを実行して標準出力をテキストとして取得
    fn capture(&mut self, step: Step, program: &str, args: &[&str]) -> DeployResult<String>;

    /// 標準入力にテキストを渡してコマンドを実行
    ///
    /// 認証情報をコマンドライン引数に載せないために使用します
    /// (`docker login --password-stdin`)。
    fn run_with_stdin(
        &mut self,
        step: Step,
        program: &str,
        args: &[&str],
        input: &str,
    ) -> DeployResult<()>;
}

/// 実際にOSのプロセスを起動するランナー
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn spawn_and_wait(
        step: Step,
        program: &str,
        args: &[&str],
        input: Option<&str>,
    ) -> DeployResult<Output> {
        tracing::debug!("Running [{}]: {} {}", step, program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
        cmd.stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

        let mut child = cmd.spawn().map_err(|e| DeployError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

        if let Some(input) = input
            && let Some(mut stdin) = child.stdin.take()
        {
            // 子プロセスが先に終了していても wait_with_output 側で検出できる
            stdin.write_all(input.as_bytes()).ok();
        }

        let output = child.wait_with_output().map_err(|e| DeployError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

        if !output.status.success() {
            return Err(DeployError::StepFailed {
                step,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output)
    }

    fn echo_stdout(output: &Output) {
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            print!("{}", stdout);
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, step: Step, program: &str, args: &[&str]) -> DeployResult<()> {
        let output = Self::spawn_and_wait(step, program, args, None)?;
        Self::echo_stdout(&output);
        Ok(())
    }

    fn capture(&mut self, step: Step, program: &str, args: &[&str]) -> DeployResult<String> {
        let output = Self::spawn_and_wait(step, program, args, None)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run_with_stdin(
        &mut self,
        step: Step,
        program: &str,
        args: &[&str],
        input: &str,
    ) -> DeployResult<()> {
        let output = Self::spawn_and_wait(step, program, args, Some(input))?;
        Self::echo_stdout(&output);
        Ok(())
    }
}
