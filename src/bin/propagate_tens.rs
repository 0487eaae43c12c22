use small_kata::utils::logger;
use small_kata::{KataConfig, KataEngine, PropagateTens};

fn main() {
    logger::init_cli_logger(false);

    let result = KataConfig::load().and_then(|config| {
        KataEngine::with_format(PropagateTens, config.output_format())
            .run(&config.propagate.sequence)
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ propagate-tens failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
