// tests/config_env.rs
use std::env;

use homework_status_bot::config::{
    Config, ENV_PRACTICUM_TOKEN, ENV_TELEGRAM_BOT_TOKEN, ENV_TELEGRAM_CHAT_ID,
};
use homework_status_bot::ConfigError;

fn clear() {
    for k in [ENV_PRACTICUM_TOKEN, ENV_TELEGRAM_BOT_TOKEN, ENV_TELEGRAM_CHAT_ID] {
        env::remove_var(k);
    }
}

#[serial_test::serial]
#[test]
fn reads_all_three_secrets() {
    clear();
    env::set_var(ENV_PRACTICUM_TOKEN, "p");
    env::set_var(ENV_TELEGRAM_BOT_TOKEN, "b");
    env::set_var(ENV_TELEGRAM_CHAT_ID, "-100500");

    let cfg = Config::from_env().expect("all secrets set");
    assert_eq!(cfg.practicum_token, "p");
    assert_eq!(cfg.telegram_bot_token, "b");
    assert_eq!(cfg.telegram_chat_id, "-100500");
    clear();
}

#[serial_test::serial]
#[test]
fn scenario_e_missing_api_token_is_fatal() {
    clear();
    env::set_var(ENV_TELEGRAM_BOT_TOKEN, "b");
    env::set_var(ENV_TELEGRAM_CHAT_ID, "1");

    let err = Config::from_env().unwrap_err();
    assert_eq!(err, ConfigError::MissingVariables(vec![ENV_PRACTICUM_TOKEN]));
    clear();
}

#[serial_test::serial]
#[test]
fn nothing_set_reports_everything() {
    clear();
    let err = Config::from_env().unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingVariables(vec![
            ENV_PRACTICUM_TOKEN,
            ENV_TELEGRAM_BOT_TOKEN,
            ENV_TELEGRAM_CHAT_ID
        ])
    );
}
