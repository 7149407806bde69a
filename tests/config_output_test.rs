use anyhow::Result;
use chrono::NaiveDate;
use daily_secrets::adapters::output::{render_compatibility, render_reading, render_signs};
use daily_secrets::utils::validation::Validate;
use daily_secrets::{
    BirthDate, BirthProfile, LetterSystem, OutputFormat, ReadingEngine, SettingsProvider,
    TomlConfig, ZodiacSign,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_drives_engine_and_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("daily-secrets.toml");
    fs::write(
        &path,
        r#"
[engine]
letter_system = "chaldean"

[output]
format = "csv"

[logging]
level = "warn"
"#,
    )?;

    let config = TomlConfig::from_file(&path)?;
    config.validate()?;
    assert_eq!(config.letter_system(), LetterSystem::Chaldean);

    let format = config.output.format;
    let engine = ReadingEngine::new(config);
    let profile = BirthProfile::new(BirthDate::parse("1990/11/29")?).with_name("John Smith");
    let reading = engine.read_on(&profile, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())?;

    let csv = render_reading(&reading, format)?;
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers()?.clone();
    let row = reader.records().next().expect("one row")?;
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .map(|i| row[i].to_string())
    };

    assert_eq!(column("birth_date").as_deref(), Some("1990-11-29"));
    assert_eq!(column("life_path").as_deref(), Some("5"));
    // Chaldean personality number of "John Smith"
    assert_eq!(column("personality").as_deref(), Some("9"));
    Ok(())
}

#[test]
fn test_engine_borrows_settings() -> Result<()> {
    let config = TomlConfig::from_toml_str("[engine]\nfallback = \"deterministic\"\n")?;
    let engine = ReadingEngine::new(&config);
    let result = engine.compatibility(ZodiacSign::Aries, ZodiacSign::Sagittarius);

    let json = render_compatibility(&result, OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["score"], 95);
    assert_eq!(value["source"], "matrix");
    assert_eq!(value["level"], "Excellent Match");
    Ok(())
}

#[test]
fn test_signs_csv_lists_calendar_order() -> Result<()> {
    let csv = render_signs(OutputFormat::Csv)?;
    let names: Vec<String> = csv::Reader::from_reader(csv.as_bytes())
        .records()
        .map(|r| r.map(|record| record[1].to_string()))
        .collect::<std::result::Result<_, _>>()?;

    let expected: Vec<String> = ZodiacSign::ALL.iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names, expected);
    Ok(())
}

#[test]
fn test_broken_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[engine\nletter_system = ").unwrap();

    let err = TomlConfig::from_file(&path).unwrap_err();
    assert_eq!(
        err.category(),
        daily_secrets::utils::error::ErrorCategory::Configuration
    );
}
