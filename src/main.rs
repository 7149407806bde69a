use clap::Parser;
use daily_secrets::adapters::output;
use daily_secrets::utils::{logger, validation::Validate};
use daily_secrets::{BirthDate, BirthProfile, CliConfig, Command, ReadingEngine, SecretsError, TomlConfig};

fn run(cli: &CliConfig, config: TomlConfig) -> daily_secrets::Result<String> {
    let format = config.output.format;
    let engine = ReadingEngine::new(config);

    match &cli.command {
        Command::Reading {
            birth_date,
            name,
            on,
        } => {
            let mut profile = BirthProfile::new(BirthDate::parse(birth_date)?);
            if let Some(name) = name {
                profile = profile.with_name(name.as_str());
            }
            let reading = match on {
                Some(on) => engine.read_on(&profile, BirthDate::parse(on)?.as_naive())?,
                None => engine.read(&profile)?,
            };
            output::render_reading(&reading, format)
        }
        Command::Compat { sign_a, sign_b } => {
            let result = engine.compatibility_by_name(sign_a, sign_b)?;
            output::render_compatibility(&result, format)
        }
        Command::Signs => output::render_signs(format),
    }
}

fn fail(e: &SecretsError) -> ! {
    tracing::error!(
        "Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        logger::init_cli_logger(cli.verbose);
        fail(&e);
    }

    // the config file decides the log format, so it is read before logging starts
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            fail(&e);
        }
    };

    let level = config.logging.level.to_ascii_lowercase();
    logger::init_logger(
        config.logging.format,
        logger::filter_for(Some(&level), cli.verbose),
    );
    tracing::debug!("Effective config: {:?}", config);

    match run(&cli, config) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => fail(&e),
    }
}
