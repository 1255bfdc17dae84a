//! 定义 KnightLog 日志器的内部诊断与指标。
//!
//! 每个 [`Logger`](crate::Logger) 持有一份计数器（其克隆共享同一份），
//! 提供对分发、写入、过滤和 sink 错误的可观测性。

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// 内部诊断与指标数据结构。
///
/// 使用原子操作确保线程安全。
#[derive(Debug)]
pub struct Diagnostics {
    /// 创建时间
    start_time: Instant,

    /// 已分发的消息总数（模板解析成功后才计数）
    messages_dispatched: AtomicU64,

    /// sink 实际写出的次数
    sink_writes: AtomicU64,

    /// 被 sink 级别范围过滤的次数
    messages_filtered: AtomicU64,

    /// sink 返回错误的次数
    sink_errors: AtomicU64,
}

/// 诊断数据的快照，用于外部查询。
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsSnapshot {
    /// 运行时间
    pub uptime: Duration,

    /// 已分发的消息总数
    pub messages_dispatched: u64,

    /// sink 实际写出的次数
    pub sink_writes: u64,

    /// 被 sink 级别范围过滤的次数
    pub messages_filtered: u64,

    /// sink 返回错误的次数
    pub sink_errors: u64,

    /// sink 调用成功率（百分比），没有调用时为 100
    pub success_rate_percent: f64,
}

impl Diagnostics {
    /// 创建新的诊断实例。
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            messages_dispatched: AtomicU64::new(0),
            sink_writes: AtomicU64::new(0),
            messages_filtered: AtomicU64::new(0),
            sink_errors: AtomicU64::new(0),
        }
    }

    pub fn increment_messages_dispatched(&self) {
        self.messages_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sink_writes(&self) {
        self.sink_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_messages_filtered(&self) {
        self.messages_filtered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_sink_errors(&self) {
        self.sink_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取诊断数据的快照。
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        let sink_writes = self.sink_writes.load(Ordering::Relaxed);
        let messages_filtered = self.messages_filtered.load(Ordering::Relaxed);
        let sink_errors = self.sink_errors.load(Ordering::Relaxed);

        let calls = sink_writes + messages_filtered + sink_errors;
        let success_rate_percent = if calls > 0 {
            ((sink_writes + messages_filtered) as f64 / calls as f64) * 100.0
        } else {
            100.0
        };

        DiagnosticsSnapshot {
            uptime: self.start_time.elapsed(),
            messages_dispatched: self.messages_dispatched.load(Ordering::Relaxed),
            sink_writes,
            messages_filtered,
            sink_errors,
            success_rate_percent,
        }
    }

    /// 重置所有计数器（主要用于测试）。
    pub fn reset(&self) {
        self.messages_dispatched.store(0, Ordering::Relaxed);
        self.sink_writes.store(0, Ordering::Relaxed);
        self.messages_filtered.store(0, Ordering::Relaxed);
        self.sink_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}
