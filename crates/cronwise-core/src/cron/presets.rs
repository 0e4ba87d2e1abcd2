//! Fixed cron presets offered to schedule forms.

use serde::Serialize;

/// A named cron expression with a short usage hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CronPreset {
    pub label: &'static str,
    pub expression: &'static str,
    pub description: &'static str,
}

const PRESETS: &[CronPreset] = &[
    CronPreset {
        label: "每天凌晨2点",
        expression: "0 0 2 * * ?",
        description: "适合数据量大的爬虫",
    },
    CronPreset {
        label: "每天早上8点",
        expression: "0 0 8 * * ?",
        description: "适合工作时间更新",
    },
    CronPreset {
        label: "每天中午12点",
        expression: "0 0 12 * * ?",
        description: "适合中午数据更新",
    },
    CronPreset {
        label: "每天晚上10点",
        expression: "0 0 22 * * ?",
        description: "适合晚间数据抓取",
    },
    CronPreset {
        label: "每6小时",
        expression: "0 0 */6 * * ?",
        description: "适合频繁更新的数据",
    },
    CronPreset {
        label: "每12小时",
        expression: "0 0 */12 * * ?",
        description: "适合中等频率更新",
    },
    CronPreset {
        label: "每周一早上9点",
        expression: "0 0 9 ? * 1",
        description: "适合每周汇总",
    },
    CronPreset {
        label: "每月1号凌晨2点",
        expression: "0 0 2 1 * ?",
        description: "适合每月统计",
    },
    CronPreset {
        label: "每30分钟",
        expression: "0 */30 * * * ?",
        description: "适合高频数据抓取",
    },
    CronPreset {
        label: "每小时",
        expression: "0 0 */1 * * ?",
        description: "适合实时性要求高的数据",
    },
];

/// All presets, in display order.
pub fn presets() -> &'static [CronPreset] {
    PRESETS
}
