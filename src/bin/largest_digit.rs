use small_kata::utils::{logger, validation::Validate};
use small_kata::{KataConfig, KataEngine, LargestDigit};

fn main() {
    logger::init_cli_logger(false);

    let result = KataConfig::load().and_then(|config| {
        // 驗證配置
        config.validate()?;
        KataEngine::with_format(LargestDigit, config.output_format())
            .run(&config.largest_digit.number)
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ largest-digit failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
