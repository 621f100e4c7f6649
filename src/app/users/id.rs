//! 用户 ID 生成

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID 生成策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// 当前 Unix 秒级时间戳的十进制字符串
    #[default]
    Timestamp,
    /// 随机 UUID v4
    Uuid,
}

/// 为新建用户分配 ID
///
/// 时间戳策略在同一秒内会顺延到 `上次 + 1`，因此同一进程内不会重复。
/// 调用方需持有存储锁，并通过 `taken` 告知某个候选 ID 是否已被占用。
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last_issued: i64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last_issued: 0,
        }
    }

    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        match self.strategy {
            IdStrategy::Timestamp => self.next_timestamp(chrono::Utc::now().timestamp(), taken),
            IdStrategy::Uuid => loop {
                let id = Uuid::new_v4().to_string();
                if !taken(&id) {
                    break id;
                }
            },
        }
    }

    fn next_timestamp(&mut self, now: i64, taken: impl Fn(&str) -> bool) -> String {
        let mut candidate = now.max(self.last_issued + 1);
        while taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued = candidate;
        candidate.to_string()
    }
}
