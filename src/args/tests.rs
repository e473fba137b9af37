use std::time::Duration;

use clap::Parser;

use super::ExporterArgs;
use super::parsers::{parse_bool_arg, parse_duration_arg};

#[test]
fn defaults_match_reference_deployment() -> Result<(), String> {
    let args = ExporterArgs::try_parse_from(["momo_exporter"])
        .map_err(|err| format!("Failed to parse defaults: {}", err))?;

    if args.listen_address != "0.0.0.0:9801" {
        return Err(format!("Unexpected listen address: {}", args.listen_address));
    }
    if args.telemetry_path != "/metrics" {
        return Err(format!("Unexpected telemetry path: {}", args.telemetry_path));
    }
    if args.scrape_uri != "http://localhost:8081/metrics" {
        return Err(format!("Unexpected scrape URI: {}", args.scrape_uri));
    }
    if !args.ssl_verify {
        return Err("Expected ssl-verify to default to true".to_owned());
    }
    if args.timeout != Duration::from_secs(5) {
        return Err(format!("Unexpected timeout: {:?}", args.timeout));
    }
    Ok(())
}

#[test]
fn ssl_verify_accepts_explicit_false() -> Result<(), String> {
    let args = ExporterArgs::try_parse_from(["momo_exporter", "--momo.ssl-verify", "false"])
        .map_err(|err| format!("Failed to parse args: {}", err))?;
    if args.ssl_verify {
        return Err("Expected ssl-verify to be false".to_owned());
    }
    Ok(())
}

#[test]
fn duration_parser_handles_units() -> Result<(), String> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("5s", Duration::from_secs(5)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
        ("30", Duration::from_secs(30)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(format!("{} parsed to {:?}, expected {:?}", input, parsed, expected));
        }
    }
    Ok(())
}

#[test]
fn duration_parser_rejects_garbage() -> Result<(), String> {
    for input in ["", "abc", "5x", "0s"] {
        if parse_duration_arg(input).is_ok() {
            return Err(format!("Expected '{}' to be rejected", input));
        }
    }
    Ok(())
}

#[test]
fn bool_parser_accepts_kingpin_spellings() -> Result<(), String> {
    if !parse_bool_arg("true")? || !parse_bool_arg("1")? || !parse_bool_arg("on")? {
        return Err("Expected truthy spellings to parse as true".to_owned());
    }
    if parse_bool_arg("false")? || parse_bool_arg("0")? || parse_bool_arg("off")? {
        return Err("Expected falsy spellings to parse as false".to_owned());
    }
    if parse_bool_arg("maybe").is_ok() {
        return Err("Expected 'maybe' to be rejected".to_owned());
    }
    Ok(())
}
