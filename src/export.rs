use std::io::Write;

use chrono::Utc;
use log::info;

use crate::types::{BurstReport, FEATURE_NAMES};

/// 生成唯一的 burst ID（含毫秒，避免连续手势冲突）
pub fn generate_burst_id() -> String {
    format!("burst_{}", Utc::now().format("%Y%m%d_%H%M%S%3f"))
}

/// 将一次手势的特征向量和分类结果写入 CSV 文件，返回文件路径
pub fn export_burst(directory: &str, report: &BurstReport) -> Result<String, String> {
    // 确保导出目录存在
    std::fs::create_dir_all(directory)
        .map_err(|e| format!("Failed to create export directory: {}", e))?;

    let filename = format!("{}/{}.csv", directory, generate_burst_id());
    let mut file = std::fs::File::create(&filename)
        .map_err(|e| format!("Failed to create file: {}", e))?;

    // 写入CSV头部：15 个特征列加标签与置信度
    writeln!(file, "{},label,confidence", FEATURE_NAMES.join(","))
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let features: Vec<String> = report.features.values().iter().map(f64::to_string).collect();
    writeln!(
        file,
        "{},{},{}",
        features.join(","),
        report.result.label,
        report.result.confidence
    )
    .map_err(|e| format!("Failed to write burst data: {}", e))?;

    info!("Exported burst to {}", filename);
    Ok(filename)
}
