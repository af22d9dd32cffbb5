//! 팩토리 설정 데모 애플리케이션
//!
//! 자기 등록된 엔티티 역할을 나열하고, 설정 파일을 게임 설정에 적용한 뒤
//! 스폰 목록의 엔티티를 생성해 한 틱씩 실행합니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

use factory_config::config::{Environment, GameConfig, PathConfig};
use factory_config::core::errors::{AppResult, ErrorContext};
use factory_config::entities::{entities, load_spawn_file};
use factory_config::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

fn main() -> AppResult<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 factory_config 시작중...");
    print_boxed_title("Factory Config");

    print_step_start(1, "Collecting registered roles");
    let roles = entities().names();
    for role in &roles {
        print_sub_task(role, "✓");
    }
    print_step_complete(1, "Roles registered", roles.len());

    print_step_start(2, "Loading settings");
    let settings_path = PathConfig::settings_path();
    let (config, report) = GameConfig::load(&settings_path)?;
    if !report.is_clean() {
        warn!(
            "{}: {} unknown keys, {} malformed values",
            settings_path.display(),
            report.unknown_keys.len(),
            report.malformed.len()
        );
    }
    let rendered = serde_json::to_string_pretty(&config).context("failed to render settings")?;
    println!("{}", rendered);
    print_step_complete(2, "Settings applied", report.applied);

    print_step_start(3, "Spawning entities");
    let mut spawn = load_spawn_file(&PathConfig::spawn_list_path())?;
    for entity in spawn.spawned.iter_mut() {
        let line = entity.update(0);
        info!("[{}] {}", entity.role(), line);
        print_sub_task(entity.role(), &line);
    }
    for role in &spawn.unknown {
        print_sub_task(role, "unknown role");
    }
    print_step_complete(3, "Entities spawned", spawn.spawned.len());

    print_final_summary(roles.len(), report.applied, spawn.spawned.len());
    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 실패는 stderr에 남깁니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("profile '{}' env file not loaded: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `ENVIRONMENT`에 따른 기본 레벨을 사용합니다.
///
/// ```bash
/// RUST_LOG=factory_config::core=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));

    info!("Current environment: {:?}", environment);
}
