//! obj_viewer - 命令行入口
//!
//! 加载配置和场景中的全部 OBJ 模型，输出网格统计信息；
//! 使用 `--interactive` 时从标准输入读取按键脚本驱动查看器。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用 config.toml / scene.toml
//! cargo run
//!
//! # 只加载一个模型，并以 debug 级别输出日志
//! cargo run -- --model cube.obj --log-level debug
//!
//! # 按键脚本：每个字符是一帧中的一次按键，大写字母同时按住 Shift
//! printf '\x1bRAAAAN\n' | cargo run -- --interactive
//! ```

use std::io::BufRead;

use anyhow::{Context, Result};
use obj_viewer::core::{log, Config, SceneConfig};
use obj_viewer::scene::{InputState, KeyCode, ViewerState};
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("config.toml");

    // 2. 应用命令行参数
    config.apply_args(std::env::args());

    // 3. 验证配置
    config.validate().context("invalid configuration")?;

    // 4. 初始化日志系统
    let log_file = config
        .logging
        .file_output
        .then_some(config.logging.log_file.as_str());
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    info!(version = env!("CARGO_PKG_VERSION"), "obj_viewer starting...");

    // 5. 加载场景并创建查看器
    let scene = SceneConfig::from_file_or_default("scene.toml");
    let mut viewer = ViewerState::load(&config, &scene).context("failed to load scene models")?;

    for model in viewer.models() {
        info!(
            model = %model.name,
            file = %model.file,
            corners = model.mesh.corner_count(),
            triangles = model.mesh.triangle_count(),
            "Model ready"
        );
    }

    if config.viewer.interactive {
        run_key_script(&mut viewer, config.viewer.frame_time)?;
    }

    Ok(())
}

/// 从标准输入读取按键脚本
fn run_key_script(viewer: &mut ViewerState, frame_time: f32) -> Result<()> {
    let mut input = InputState::new();

    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read key script")?;

        for ch in line.chars() {
            let Some(key) = KeyCode::from_char(ch) else {
                continue;
            };

            if ch.is_ascii_uppercase() {
                input.press(KeyCode::LeftShift);
            }
            input.press(key);
            viewer.update(&input, frame_time);
            input.end_frame();
            input.release_all();
        }

        let model = viewer.current_model();
        let position = model.transform.position;
        let (roll, pitch, yaw) = model.transform.rotation.euler_angles();
        info!(
            model = %model.name,
            mode = ?viewer.mode(),
            paused = viewer.is_paused(),
            position = ?[position.x, position.y, position.z],
            rotation_deg = ?[roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()],
            "Viewer state"
        );
    }

    Ok(())
}
