//! Keys command implementation.

use std::io::ErrorKind;

use clap::Subcommand;
use dialoguer::{Error as DialoguerError, Password, Select};

use crate::app::api::{self, Action, ClientMode, OutputFormat};
use crate::app::output::{render_keys, status_icon};
use crate::domain::{AppError, KeyStatus, PROVIDERS, find_provider};

#[derive(Subcommand)]
pub enum KeysCommands {
    /// List providers and the state of their keys
    #[clap(visible_alias = "ls")]
    List,
    /// Store a key and validate it
    Set {
        /// Provider id (gemini, openai, together, cohere)
        provider: Option<String>,
        /// Key value; prompted without echo when omitted
        #[arg(long)]
        key: Option<String>,
    },
    /// Re-validate a stored key
    Test {
        /// Provider id
        provider: String,
    },
}

impl KeysCommands {
    pub fn action(&self) -> Option<Action> {
        match self {
            KeysCommands::List => None,
            KeysCommands::Set { .. } | KeysCommands::Test { .. } => Some(Action::TestKey),
        }
    }
}

pub fn run_keys(
    command: KeysCommands,
    mode: ClientMode,
    format: OutputFormat,
) -> Result<i32, AppError> {
    match command {
        KeysCommands::List => {
            let rows = api::list_keys()?;
            print!("{}", render_keys(&rows, format)?);
            Ok(0)
        }
        KeysCommands::Set { provider, key } => {
            let provider = match provider {
                Some(provider) => provider,
                None => match prompt_provider()? {
                    Some(provider) => provider,
                    None => return Ok(0),
                },
            };
            let info = find_provider(&provider)?;
            let secret = match key {
                Some(key) => key,
                None => {
                    println!("{}: {} ({})", info.display_name, info.instructions, info.console_url);
                    match prompt_secret(info.key_placeholder)? {
                        Some(secret) => secret,
                        None => return Ok(0),
                    }
                }
            };

            let status = api::set_key(info.id, &secret, mode)?;
            Ok(report_status(info.id, status, info.probe_supported, mode))
        }
        KeysCommands::Test { provider } => {
            let info = find_provider(&provider)?;
            let status = api::test_key(info.id, mode)?;
            Ok(report_status(info.id, status, info.probe_supported, mode))
        }
    }
}

fn report_status(
    provider_id: &str,
    status: KeyStatus,
    probe_supported: bool,
    mode: ClientMode,
) -> i32 {
    match status {
        KeyStatus::Valid if mode == ClientMode::Mock => {
            println!("{} {} key is valid (mock run, not saved)", status_icon(status), provider_id);
            0
        }
        KeyStatus::Valid => {
            println!("{} {} key is valid and saved", status_icon(status), provider_id);
            0
        }
        KeyStatus::Invalid => {
            eprintln!("{} {}", status_icon(status), Action::TestKey.failure_message());
            1
        }
        _ if !probe_supported => {
            println!(
                "{} {} key stored in memory only; validation is not available for this provider",
                status_icon(status),
                provider_id
            );
            0
        }
        _ => {
            println!("{} {} key is {}", status_icon(status), provider_id, status);
            0
        }
    }
}

fn prompt_provider() -> Result<Option<String>, AppError> {
    let items: Vec<String> = PROVIDERS
        .iter()
        .map(|provider| format!("{} ({})", provider.display_name, provider.free_tier))
        .collect();
    let selection = Select::new()
        .with_prompt("Select provider")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Interactive(format!("Failed to select provider: {}", err)))?;

    Ok(selection.map(|index| PROVIDERS[index].id.to_string()))
}

fn prompt_secret(placeholder: &str) -> Result<Option<String>, AppError> {
    match Password::new().with_prompt(format!("API key ({})", placeholder)).interact() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interactive(format!("Failed to read API key: {}", err))),
    }
}
