use bookworms::core::ConfigProvider;
use bookworms::utils::{logger, validation::Validate};
use bookworms::{
    BookwormPipeline, BookwormsEngine, CliConfig, LoadOutcome, LocalStorage, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let exit_code = match cli.config.clone() {
        Some(config_path) => {
            tracing::info!("📁 Loading configuration from: {}", config_path);
            match TomlConfig::from_file(&config_path) {
                Ok(config) => run(config).await,
                Err(e) => report_failure(&e),
            }
        }
        None => run(cli).await,
    };

    std::process::exit(exit_code);
}

async fn run<C: ConfigProvider + Validate>(config: C) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        return report_failure(&e);
    }

    let pipeline = BookwormPipeline::new(LocalStorage::default(), config);
    let engine = BookwormsEngine::new(pipeline);

    match engine.run().await {
        Ok(LoadOutcome::Rendered(report)) => {
            print!("{}", report);
            0
        }
        Ok(LoadOutcome::Written(path)) => {
            println!("📁 Report saved to: {}", path);
            0
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &bookworms::BookwormsError) -> i32 {
    tracing::error!("❌ failed to load bookworms: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    e.exit_code()
}
