//! # 数据采集进程
//!
//! 采集端对驱动来说是不透明的协作者，只通过一个窄接口交互：
//! `run(task, mode, seed) -> (exit_code, output_lines, error_text)`。
//!
//! [`ShellCollector`] 以子进程方式执行配置中的命令模板，逐行阻塞读取 stdout，
//! 每读到一行就交给回显回调。stderr 重定向到匿名临时文件，
//! 进程退出后再读回，单线程读取 stdout 不会因 stderr 管道写满而死锁。

use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, error, info};

use crate::error::DriverError;
use crate::settings::CollectorSettings;

/// 采集进程的输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectorOutput {
    /// 退出码；被信号终止时为 `None`
    pub exit_code: Option<i32>,

    /// stdout 各行（已去除行尾换行）
    pub output_lines: Vec<String>,

    /// stderr 全文
    pub error_text: String,
}

impl CollectorOutput {
    /// 退出码为 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// 数据采集接口
pub trait DataCollector {
    /// 为一个任务运行采集，每读到一行输出就调用一次 `sink`
    ///
    /// 只有无法启动时才返回错误；非零退出通过 [`CollectorOutput::exit_code`] 表达。
    fn run(
        &mut self,
        task: &str,
        mode: &str,
        seed: u64,
        sink: &mut dyn FnMut(&str),
    ) -> Result<CollectorOutput, DriverError>;
}

/// 以子进程执行命令模板的采集器
#[derive(Debug, Clone)]
pub struct ShellCollector {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ShellCollector {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    pub fn from_settings(settings: &CollectorSettings) -> Self {
        Self {
            program: settings.program.clone(),
            args: settings.args.clone(),
            working_dir: settings.working_dir.clone(),
        }
    }

    /// 替换参数模板中的占位符
    pub fn render_args(&self, task: &str, mode: &str, seed: u64) -> Vec<String> {
        let seed = seed.to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{task}", task)
                    .replace("{mode}", mode)
                    .replace("{seed}", &seed)
            })
            .collect()
    }

    fn spawn_error(&self, source: io::Error) -> DriverError {
        DriverError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    fn read_error(&self, source: io::Error) -> DriverError {
        DriverError::CollectorIo {
            program: self.program.clone(),
            source,
        }
    }
}

/// 逐行读取直到 EOF，每行去掉行尾换行后交给 `sink`
///
/// 非 UTF-8 字节按有损方式转换。
fn read_lines<R: BufRead>(mut reader: R, sink: &mut dyn FnMut(&str)) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        sink(line);
        lines.push(line.to_string());
    }
}

impl DataCollector for ShellCollector {
    fn run(
        &mut self,
        task: &str,
        mode: &str,
        seed: u64,
        sink: &mut dyn FnMut(&str),
    ) -> Result<CollectorOutput, DriverError> {
        let args = self.render_args(task, mode, seed);
        info!("Running collector: {} {}", self.program, args.join(" "));

        let mut stderr_file = tempfile::tempfile().map_err(|e| self.spawn_error(e))?;
        let stderr_handle = stderr_file.try_clone().map_err(|e| self.spawn_error(e))?;

        let mut command = Command::new(&self.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::from(stderr_handle));
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|e| self.spawn_error(e))?;

        let output_lines = match child.stdout.take() {
            Some(stdout) => match read_lines(BufReader::new(stdout), sink) {
                Ok(lines) => lines,
                Err(e) => {
                    error!("Reading collector output failed, killing process: {}", e);
                    // 子进程可能已退出，kill 失败无需处理
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(self.read_error(e));
                },
            },
            None => Vec::new(),
        };

        let status = child.wait().map_err(|e| self.read_error(e))?;
        debug!("Collector exited with {}", status);

        let mut raw_stderr = Vec::new();
        stderr_file
            .seek(SeekFrom::Start(0))
            .and_then(|_| stderr_file.read_to_end(&mut raw_stderr))
            .map_err(|e| self.read_error(e))?;

        Ok(CollectorOutput {
            exit_code: status.code(),
            output_lines,
            error_text: String::from_utf8_lossy(&raw_stderr).into_owned(),
        })
    }
}
