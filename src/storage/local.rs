//! Local Storage Adapter

use log::warn;

use board_core::{AppConfig, Board, StorageConfig};

use super::{StorageError, StorageResult};

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .ok_or(StorageError::Unavailable("window"))?
        .local_storage()?
        .ok_or(StorageError::Unavailable("localStorage"))
}

fn read(key: &str) -> StorageResult<Option<String>> {
    Ok(local_storage()?.get_item(key)?)
}

fn write(key: &str, value: &str) -> StorageResult<()> {
    local_storage()?.set_item(key, value)?;
    Ok(())
}

/// Capture: write the board under the tasks key
pub fn save_board(config: &StorageConfig, board: &Board) -> StorageResult<()> {
    write(&config.tasks_key, &board.capture_json()?)
}

/// Read the stored board, seeding storage with an empty board on first run
pub fn load_board(config: &StorageConfig) -> Board {
    match read(&config.tasks_key) {
        Ok(Some(json)) => Board::from_json(&json).unwrap_or_else(|e| {
            warn!("ignoring stored board under '{}': {}", config.tasks_key, e);
            Board::new()
        }),
        Ok(None) => {
            let board = Board::new();
            if let Err(e) = save_board(config, &board) {
                warn!("could not seed local storage: {}", e);
            }
            board
        }
        Err(e) => {
            warn!("local storage unavailable, starting empty: {}", e);
            Board::new()
        }
    }
}

/// Defaults, overridden by the JSON stored under the config key
pub fn load_config() -> AppConfig {
    let key = StorageConfig::default().config_key;
    match read(&key) {
        Ok(Some(json)) => AppConfig::from_json(&json).unwrap_or_else(|e| {
            warn!("ignoring config under '{}': {}", key, e);
            AppConfig::default()
        }),
        _ => AppConfig::default(),
    }
}
