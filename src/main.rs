mod classifier;
mod config;
mod export;
mod features;
mod logger;
mod pipeline;
mod sensor;
mod types;
mod utils;

use std::env;
use std::io::{self, BufRead, Write};

use dotenv::dotenv;
use log::{error, info, warn};

use classifier::GestureModel;
use config::{AppConfig, ConfigManager};
use pipeline::GesturePipeline;
use sensor::{ReplaySensor, SampleSource, SimulatedSensor};

fn main() {
    logger::init_logger();
    info!("GestureHub starting");

    dotenv().ok(); // 加载 .env 文件

    let config = load_config();

    if let Err(e) = run(config) {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

/// 配置优先级：GESTUREHUB_CONFIG 环境变量 > 当前目录 config.toml > 内置默认值
fn load_config() -> AppConfig {
    let path = env::var("GESTUREHUB_CONFIG").unwrap_or_else(|_| "config.toml".into());

    match ConfigManager::load_from_file(&path) {
        Ok(manager) => {
            info!("Loaded configuration from {}", path);
            manager.get_config().clone()
        }
        Err(e) => {
            warn!("Using default configuration ({}: {})", path, e);
            AppConfig::default()
        }
    }
}

fn build_source(config: &AppConfig) -> Result<Box<dyn SampleSource>, Box<dyn std::error::Error>> {
    match config.sensor.mode.as_str() {
        "replay" => {
            let sensor = ReplaySensor::from_file(&config.sensor.replay_path)?;
            Ok(Box::new(sensor))
        }
        _ => Ok(Box::new(SimulatedSensor::new(&config.sensor))),
    }
}

fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let model = GestureModel::load_from_file(config.get_model_path())?;
    let mut source = build_source(&config)?;
    let pipeline = GesturePipeline::new(config.sampling.clone());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Press Enter to measure and guess (q to quit): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let trimmed = line.trim();

        if trimmed == "q" || trimmed == "quit" {
            break;
        }
        if !trimmed.is_empty() {
            continue;
        }

        // 空行触发一次测量
        match pipeline.run_once(source.as_mut(), &model) {
            Ok(report) => {
                println!("('{}', {:.4})", report.result.label, report.result.confidence);

                if config.export.enabled {
                    if let Err(e) = export::export_burst(&config.export.directory, &report) {
                        warn!("Export failed: {}", e);
                    }
                }
            }
            Err(e) => error!("Classification failed: {}", e),
        }
    }

    info!("GestureHub shutting down");
    Ok(())
}
