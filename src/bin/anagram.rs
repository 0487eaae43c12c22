use small_kata::utils::logger;
use small_kata::{Anagram, KataConfig, KataEngine};

fn main() {
    logger::init_cli_logger(false);

    let result = KataConfig::load().and_then(|config| {
        KataEngine::with_format(Anagram, config.output_format()).run(&config.anagram_input())
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ anagram failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
