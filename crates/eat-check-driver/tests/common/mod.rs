//! Mock 采集进程
//!
//! 按任务名返回预设的日志，记录每次调用。

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use eat_check_driver::{CollectorOutput, DataCollector, DriverError, TaskCatalog, TaskEntry};

/// 一次调用的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub task: String,
    pub mode: String,
    pub seed: u64,
}

/// 模拟采集进程
#[derive(Debug, Clone, Default)]
pub struct MockCollector {
    scripts: HashMap<String, CollectorOutput>,
    calls: Rc<RefCell<Vec<MockCall>>>,
}

impl MockCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 任务成功退出并输出 `lines`
    pub fn with_log(mut self, task: &str, lines: &[&str]) -> Self {
        self.scripts.insert(
            task.to_string(),
            CollectorOutput {
                exit_code: Some(0),
                output_lines: lines.iter().map(|l| l.to_string()).collect(),
                error_text: String::new(),
            },
        );
        self
    }

    /// 任务以 `code` 退出
    pub fn with_failure(mut self, task: &str, code: i32, stderr: &str) -> Self {
        self.scripts.insert(
            task.to_string(),
            CollectorOutput {
                exit_code: Some(code),
                output_lines: vec!["collecting...".to_string()],
                error_text: stderr.to_string(),
            },
        );
        self
    }

    /// 共享的调用记录（驱动取得 collector 所有权后仍可读取）
    pub fn calls(&self) -> Rc<RefCell<Vec<MockCall>>> {
        Rc::clone(&self.calls)
    }
}

impl DataCollector for MockCollector {
    fn run(
        &mut self,
        task: &str,
        mode: &str,
        seed: u64,
        sink: &mut dyn FnMut(&str),
    ) -> Result<CollectorOutput, DriverError> {
        self.calls.borrow_mut().push(MockCall {
            task: task.to_string(),
            mode: mode.to_string(),
            seed,
        });

        let output = self.scripts.get(task).cloned().unwrap_or_else(|| CollectorOutput {
            exit_code: Some(0),
            output_lines: Vec::new(),
            error_text: String::new(),
        });
        for line in &output.output_lines {
            sink(line);
        }
        Ok(output)
    }
}

pub fn catalog(tasks: &[(&str, bool)]) -> TaskCatalog {
    TaskCatalog::new(tasks.iter().map(|&(name, enabled)| TaskEntry::new(name, enabled)).collect())
        .unwrap()
}

/// 一个成功的左臂 episode
pub const LEFT_EPISODE: [&str; 3] = [
    "left arm target_pose: 0.10 0.20 0.30 0.0 0.0 0.0 1.0",
    "left arm constraint_pose: None",
    "simulate data episode 0 success",
];
