use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 应用配置管理模块
/// 集中管理所有配置项，提供默认值和配置验证

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub sampling: SamplingConfig,
    pub model: ModelConfig,
    pub sensor: SensorConfig,
    pub export: ExportConfig,
}

/// 采样配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// 每次手势测量采集的样本数
    pub sample_count: usize,
    /// 相邻样本之间的阻塞延时（毫秒），5ms 对应 200Hz
    pub inter_sample_delay_ms: u64,
    /// 峰值检测阈值，作用于原始读数的平方值
    pub peak_threshold: i64,
}

/// 模型配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: String,
}

/// 传感器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// 数据来源："simulated" 或 "replay"
    pub mode: String,
    /// replay 模式读取的 CSV 文件路径
    pub replay_path: String,
    /// 模拟传感器静止基线（原始单位，z 轴默认 -1000 即 1g）
    pub baseline: [i32; 3],
    /// 模拟传感器噪声幅度
    pub noise: i32,
    /// 模拟传感器单次采样出现尖峰的概率
    pub spike_chance: f64,
    /// 尖峰幅度
    pub spike_magnitude: i32,
}

/// 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub enabled: bool,
    pub directory: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            model: ModelConfig::default(),
            sensor: SensorConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_count: 100,
            inter_sample_delay_ms: 5,
            peak_threshold: 100_000,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "model.json".to_string(),
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            mode: "simulated".to_string(),
            replay_path: "replay.csv".to_string(),
            baseline: [0, 0, -1000],
            noise: 30,
            spike_chance: 0.05,
            spike_magnitude: 900,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: "data_export".to_string(),
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;

        let config: AppConfig = toml::from_str(&content).map_err(ConfigError::ParseError)?;

        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;

        std::fs::write(path, content).map_err(ConfigError::IoError)?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.sample_count == 0 {
            return Err(ConfigError::ValidationError(
                "Sample count must be positive".to_string(),
            ));
        }

        if self.sampling.peak_threshold <= 0 {
            return Err(ConfigError::ValidationError(
                "Peak threshold must be positive".to_string(),
            ));
        }

        if self.sensor.mode != "simulated" && self.sensor.mode != "replay" {
            return Err(ConfigError::ValidationError(format!(
                "Unknown sensor mode: {}",
                self.sensor.mode
            )));
        }

        if self.sensor.noise < 0 {
            return Err(ConfigError::ValidationError(
                "Sensor noise must be non-negative".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.sensor.spike_chance) {
            return Err(ConfigError::ValidationError(
                "Spike chance must be within [0, 1]".to_string(),
            ));
        }

        if self.export.directory.is_empty() {
            return Err(ConfigError::ValidationError(
                "Export directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// 获取模型文件路径
    pub fn get_model_path(&self) -> PathBuf {
        PathBuf::from(&self.model.path)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 配置管理器
pub struct ConfigManager {
    config: AppConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// 创建配置管理器（使用默认配置）
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            config_path: None,
        }
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let config = AppConfig::load_from_file(&path)?;
        Ok(Self {
            config,
            config_path: Some(path.as_ref().to_path_buf()),
        })
    }

    /// 获取当前配置
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// 保存配置
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.config_path {
            self.config.save_to_file(path)?;
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sampling.sample_count, 100);
        assert_eq!(config.sampling.inter_sample_delay_ms, 5);
        assert_eq!(config.sampling.peak_threshold, 100_000);
    }

    #[test]
    fn zero_sample_count_is_rejected() {
        let mut config = AppConfig::default();
        config.sampling.sample_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let mut config = AppConfig::default();
        config.sampling.peak_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_sensor_mode_is_rejected() {
        let mut config = AppConfig::default();
        config.sensor.mode = "hardware".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.sampling.sample_count, config.sampling.sample_count);
        assert_eq!(parsed.sensor.mode, config.sensor.mode);
        assert_eq!(parsed.export.directory, config.export.directory);
    }
}
