use clap::Parser;
use small_kata::utils::{logger, validation::Validate};
use small_kata::{
    Anagram, AnagramInput, CliConfig, KataCommand, KataConfig, KataEngine, KataError,
    LargestDigit, OutputFormat, PropagateTens, ReverseWords,
};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Kata failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), KataError> {
    // 載入配置
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            KataConfig::from_file(path)?
        }
        None => KataConfig::load()?,
    };

    // 應用命令列覆蓋設定
    match &cli.command {
        KataCommand::ReverseWords { sentence: Some(sentence) } => {
            config.reverse_words.sentence = sentence.clone();
        }
        KataCommand::Anagram {
            left: Some(left),
            right: Some(right),
        } => {
            config.anagram.left = left.clone();
            config.anagram.right = right.clone();
        }
        KataCommand::LargestDigit { number: Some(number) } => {
            config.largest_digit.number = *number;
        }
        KataCommand::Propagate { values } if !values.is_empty() => {
            config.propagate.sequence = values.clone();
        }
        _ => {}
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    // 只驗證所選 kata 會用到的配置
    if matches!(cli.command, KataCommand::LargestDigit { .. } | KataCommand::All) {
        config.validate()?;
    }

    let format = config.output_format();
    match &cli.command {
        KataCommand::ReverseWords { .. } => print_reverse_words(&config, format),
        KataCommand::Anagram { .. } => print_anagram(&config.anagram_input(), format),
        KataCommand::LargestDigit { .. } => print_largest_digit(&config, format),
        KataCommand::Propagate { .. } => print_propagate(&config, format),
        KataCommand::All => {
            print_reverse_words(&config, format)?;
            print_anagram(&config.anagram_input(), format)?;
            print_largest_digit(&config, format)?;
            print_propagate(&config, format)
        }
    }
}

fn print_reverse_words(config: &KataConfig, format: OutputFormat) -> Result<(), KataError> {
    let engine = KataEngine::with_format(ReverseWords, format);
    println!("{}", engine.run(&config.reverse_words.sentence)?);
    Ok(())
}

fn print_anagram(input: &AnagramInput, format: OutputFormat) -> Result<(), KataError> {
    let engine = KataEngine::with_format(Anagram, format);
    println!("{}", engine.run(input)?);
    Ok(())
}

fn print_largest_digit(config: &KataConfig, format: OutputFormat) -> Result<(), KataError> {
    let engine = KataEngine::with_format(LargestDigit, format);
    println!("{}", engine.run(&config.largest_digit.number)?);
    Ok(())
}

fn print_propagate(config: &KataConfig, format: OutputFormat) -> Result<(), KataError> {
    let engine = KataEngine::with_format(PropagateTens, format);
    println!("{}", engine.run(&config.propagate.sequence)?);
    Ok(())
}
