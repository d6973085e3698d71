//! Top-level subcommand handlers.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use userform_core::{CountryTable, FieldKey, FormSession, FormState};

use crate::cli::ValidateArgs;
use crate::config::UserformConfig;
use crate::driver::Driver;
use crate::error::{Error, Result};

/// Builds a session from the configuration.
pub fn build_session(config: &UserformConfig) -> Result<FormSession> {
    let countries = config.load_countries()?;
    tracing::debug!(countries = countries.len(), "Country table ready");
    Ok(FormSession::new(Arc::new(countries)).with_policy(config.form))
}

/// `userform run`: drive a session from a script file or the given reader.
pub fn cmd_run<R, W>(
    config: &UserformConfig,
    script: Option<&Path>,
    assume_yes: bool,
    stdin: R,
    out: W,
) -> Result<FormSession>
where
    R: BufRead,
    W: Write,
{
    let session = build_session(config)?;
    let assume_yes = assume_yes || !config.session.confirm_deletes;
    match script {
        Some(path) => {
            tracing::info!(script = %path.display(), "Running session script");
            let reader = BufReader::new(File::open(path)?);
            let mut driver = Driver::new(session, reader, out, assume_yes);
            driver.run()?;
            Ok(driver.into_session())
        }
        None => {
            let mut driver = Driver::new(session, stdin, out, assume_yes);
            driver.run()?;
            Ok(driver.into_session())
        }
    }
}

/// `userform countries`: print the country table.
pub fn cmd_countries(countries: &CountryTable, out: &mut dyn Write) -> Result<()> {
    for entry in countries.entries() {
        writeln!(out, "{:<4}{}", entry.code, entry.name)?;
    }
    Ok(())
}

/// Fills a blank form from `args`.
pub fn form_from_args(args: &ValidateArgs) -> Result<FormState> {
    let mut form = FormState::new();
    form.set_value(FieldKey::Name, args.name.as_str())?;
    form.set_value(FieldKey::Email, args.email.as_str())?;
    form.set_value(FieldKey::City, args.city.as_str())?;
    form.set_value(FieldKey::Country, args.country.as_str())?;
    for (i, phone) in args.phones.iter().enumerate() {
        if i > 0 {
            form.add_phone_slot();
        }
        form.set_value(FieldKey::Phone(i), phone.as_str())?;
    }
    Ok(form)
}

/// `userform validate`: check one record and print its field errors.
///
/// Fails with [`Error::InvalidForm`] when any rule fails.
pub fn cmd_validate(
    countries: &CountryTable,
    args: &ValidateArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let form = form_from_args(args)?;
    let report = form.validate(countries);
    if report.is_valid() {
        writeln!(out, "valid")?;
        writeln!(out, "{}", serde_json::to_string_pretty(&form.value_json()?)?)?;
        return Ok(());
    }
    for (key, error) in report.iter() {
        writeln!(out, "{key}: {error}")?;
    }
    Err(Error::InvalidForm {
        count: report.len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn valid_args() -> ValidateArgs {
        ValidateArgs {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            city: "X".to_string(),
            country: "US".to_string(),
            phones: vec!["1234567890".to_string()],
        }
    }

    #[test]
    fn test_validate_valid_record() {
        let mut out = Vec::new();
        cmd_validate(&CountryTable::builtin(), &valid_args(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("valid\n"));
        assert!(text.contains("\"phoneNumbers\""));
    }

    #[test]
    fn test_validate_reports_errors() {
        let mut args = valid_args();
        args.email = "nope".to_string();
        args.phones.push("123".to_string());
        let mut out = Vec::new();
        let err = cmd_validate(&CountryTable::builtin(), &args, &mut out).unwrap_err();
        assert!(matches!(err, Error::InvalidForm { count: 2 }));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("email: must be a valid email address"));
        assert!(text.contains("phoneNumbers.1: must match ^[0-9]{10}$"));
    }

    #[test]
    fn test_validate_without_phones_requires_one() {
        let mut args = valid_args();
        args.phones.clear();
        let form = form_from_args(&args).unwrap();
        assert_eq!(form.phone_count(), 1);
        let mut out = Vec::new();
        assert!(cmd_validate(&CountryTable::builtin(), &args, &mut out).is_err());
    }

    #[test]
    fn test_countries_listing() {
        let mut out = Vec::new();
        cmd_countries(&CountryTable::builtin(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|l| l == "US  United States"));
    }

    #[test]
    fn test_run_applies_config_policy() {
        let mut config = UserformConfig::default();
        config.form.keep_one_phone_slot = true;
        let mut out = Vec::new();
        let session = cmd_run(&config, None, false, Cursor::new("remove-phone 0\n"), &mut out).unwrap();
        assert_eq!(session.form().phone_count(), 1);
        assert!(String::from_utf8(out).unwrap().contains("no phone slot removed"));
    }

    #[test]
    fn test_run_without_confirmation_when_disabled() {
        let mut config = UserformConfig::default();
        config.session.confirm_deletes = false;
        let script = "set name A\nset email a@b.com\nset city X\nset country US\nset phone 0 1234567890\nsubmit\ndelete 0\nlist\n";
        let mut out = Vec::new();
        let session = cmd_run(&config, None, false, Cursor::new(script), &mut out).unwrap();
        assert!(session.store().is_empty());
        assert!(String::from_utf8(out).unwrap().contains("no entries"));
    }
}
