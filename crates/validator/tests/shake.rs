//! Shake feedback driven by field validation, on a paused tokio clock.

use std::time::Duration;

use form_validator::prelude::*;
use tokio::time::sleep;

fn shaking_field(value: &str) -> StringValidator {
    let config = FieldConfig::default()
        .with_shake_on_invalid(true)
        .with_shake(ShakeConfig {
            strength: ShakeStrength::Custom(20.0),
            direction: ShakeDirection::Left,
            step_ms: 20,
        });
    StringValidator::with_config(value.to_owned(), vec![Box::new(Required)], config)
}

#[tokio::test(start_paused = true)]
async fn failed_validate_shakes() {
    let mut field = shaking_field("");
    assert!(!field.validate(None));
    assert!(field.shake_state().is_some());

    sleep(Duration::from_millis(21)).await;
    assert_eq!(field.shake_offset(), -20.0);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(field.shake_offset(), 0.0);
}

#[tokio::test(start_paused = true)]
async fn passing_validate_does_not_shake() {
    let mut field = shaking_field("ok");
    assert!(field.validate(None));
    assert!(field.shake_state().is_none());
    assert_eq!(field.shake_offset(), 0.0);
}

#[tokio::test(start_paused = true)]
async fn typing_never_shakes() {
    let mut field = shaking_field("ok");
    field.on_value_change(String::new());
    assert!(field.is_error());
    assert!(field.shake_state().is_none());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_field_stops_the_shake() {
    let mut field = shaking_field("");
    field.validate(None);
    let state = field.shake_state().cloned().unwrap();

    sleep(Duration::from_millis(12)).await;
    drop(field);
    // Let the cancelled task observe its token.
    tokio::task::yield_now().await;

    let frozen = state.position();
    assert!(frozen < 0.0 && frozen > -20.0, "frozen at {frozen}");
    sleep(Duration::from_millis(500)).await;
    assert_eq!(state.position(), frozen);
}

#[tokio::test(start_paused = true)]
async fn cancelling_a_shared_scope_stops_every_field() {
    let form = ShakeScope::current().unwrap();
    let mut first = shaking_field("").with_shake_scope(form.child());
    let mut second = shaking_field("").with_shake_scope(form.child());
    first.validate(None);
    second.validate(None);

    sleep(Duration::from_millis(12)).await;
    form.cancel();
    tokio::task::yield_now().await;

    let frozen = (first.shake_offset(), second.shake_offset());
    sleep(Duration::from_millis(500)).await;
    assert_eq!((first.shake_offset(), second.shake_offset()), frozen);
    assert!(frozen.0 < 0.0);
}

#[tokio::test(start_paused = true)]
async fn revalidating_restarts_the_shake() {
    let mut field = shaking_field("");
    field.validate(None);
    sleep(Duration::from_millis(100)).await;

    field.validate(None);
    sleep(Duration::from_millis(23)).await;
    // The first run would be back at rest by now; the restart is at its
    // first target.
    assert_eq!(field.shake_offset(), -20.0);
}
