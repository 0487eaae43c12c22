use small_kata::utils::logger;
use small_kata::{KataConfig, KataEngine, ReverseWords};

fn main() {
    logger::init_cli_logger(false);

    let result = KataConfig::load().and_then(|config| {
        KataEngine::with_format(ReverseWords, config.output_format())
            .run(&config.reverse_words.sentence)
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ reverse-words failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
