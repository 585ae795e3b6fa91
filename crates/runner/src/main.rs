use brokerx_runner::{
    BrokerConfig, DemoAccount, in_memory_services, postgres_services, run_demo_session,
};
use log::info;

fn print_help() {
    eprintln!(
        r#"BrokerX - brokerage core demo session

USAGE:
    brokerx [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    DATABASE_URL                     PostgreSQL connection string (in-memory when unset)
    DATABASE_MAX_CONNECTIONS         Connection pool size (default: 5)
    PASSWORD_ALLOWED_RETRIES         Failed logins before lockout (default: 5)
    PASSWORD_LOCK_DURATION_MINUTES   Lockout duration (default: 30)
    RUST_LOG                         Log level filter (default: info)
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            BrokerConfig::from_file(&path)?
        }
        None => BrokerConfig::from_env()?,
    };
    info!(
        "Lockout policy: {} retries, {} minute lock",
        config.auth.password_allowed_retries, config.auth.password_lock_duration_minutes
    );

    let account = DemoAccount::default();
    let report = if config.uses_database() {
        info!("Storage: PostgreSQL");
        let services = postgres_services(&config, &account).await?;
        run_demo_session(&services, &account).await
    } else {
        info!("Storage: in-memory");
        let (services, _orders) = in_memory_services(&config, &account)?;
        run_demo_session(&services, &account).await
    };

    let accepted = report
        .steps
        .iter()
        .filter(|step| step.outcome.is_accepted())
        .count();
    info!(
        "Session finished: {} steps, {} accepted",
        report.steps.len(),
        accepted
    );
    Ok(())
}
