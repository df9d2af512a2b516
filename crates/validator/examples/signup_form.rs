//! A sign-up form driven from the terminal.
//!
//! Simulates a user filling in four fields, then submitting. Run with
//! `RUST_LOG=form_validator=debug` to see visibility changes and shakes.

use std::time::Duration;

use form_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn report(name: &str, field: &TextFieldValidator) {
    let status = match field.outcome() {
        None => "-".to_owned(),
        Some(outcome) => outcome.to_string(),
    };
    let text = field.supporting_text(Outcome::Info).unwrap_or_default();
    println!("  {name:<10} {:<22} [{status}] {text}", format!("{:?}", &*field.text()));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = FieldConfig::from_json(
        r#"{ "shake_on_invalid": true, "shake": { "strength": "normal", "step_ms": 30 } }"#,
    )?;

    let mut email = TextFieldValidator::with_config(
        TextFieldValue::default(),
        vec![Box::new(Required), Box::new(Email)],
        config.clone(),
    );
    let mut password = TextFieldValidator::with_config(
        TextFieldValue::default(),
        vec![Box::new(Required), Box::new(MinLength::new(8).exclude_whitespace())],
        config.clone(),
    );
    let mut confirm = TextFieldValidator::with_config(TextFieldValue::default(), vec![], config)
        .rule(Required)
        .rule(PasswordMatches::new(password.handle()));
    let mut phone = TextFieldValidator::from_text("", vec![Box::new(Phone::region("GB"))]);

    println!("before typing:");
    for (name, field) in [("email", &email), ("password", &password), ("confirm", &confirm), ("phone", &phone)] {
        report(name, field);
    }

    email.on_text_change("jane@");
    password.on_text_change("hunter 2");
    confirm.on_text_change("hunter 2");
    phone.on_text_change("07740973910");

    println!("after typing:");
    for (name, field) in [("email", &email), ("password", &password), ("confirm", &confirm), ("phone", &phone)] {
        report(name, field);
    }

    let passed = {
        let fields: [&mut dyn FieldValidation; 4] = [&mut email, &mut password, &mut confirm, &mut phone];
        validate_all(fields)
    };
    println!("submit: {}", if passed { "accepted" } else { "rejected" });

    tokio::time::sleep(Duration::from_millis(45)).await;
    println!("email shake offset mid-animation: {:.1}", email.shake_offset());

    email.on_text_change("jane@example.com");
    password.on_text_change("correct horse");
    confirm.on_text_change("correct horse");

    let fields: [&mut dyn FieldValidation; 4] = [&mut email, &mut password, &mut confirm, &mut phone];
    let outcome = validate_all_with_result(fields);
    println!("resubmit: {outcome}");
    Ok(())
}
