//! Display implementation for ticklist messages.
//!
//! All message text is defined here, in one match. Callers build a
//! [`Message`] and let the formatting macros or `to_string()` render it.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TODO MESSAGES ===
            Message::TodoCreated(id) => format!("Todo #{} created", id),
            Message::TodoUpdated(id) => format!("Todo #{} updated", id),
            Message::TodoChecked(id) => format!("Todo #{} marked as done", id),
            Message::TodoUnchecked(id) => format!("Todo #{} marked as not done", id),
            Message::TodoRemoved(id) => format!("Todo #{} moved to trash", id),
            Message::TodoRestored(id) => format!("Todo #{} restored from trash", id),
            Message::TodoNotFound(id) => format!("Todo #{} not found", id),
            Message::TodoIsDone(id) => format!("Todo #{} is done; uncheck it to edit", id),
            Message::TodoInTrash(id) => format!("Todo #{} is in the trash; restore it to edit", id),
            Message::TodoSubmitIgnored => "Nothing to add: a text and a date are required".to_string(),
            Message::TodosNotFound => "No todos to show".to_string(),
            Message::TrashEmptied(count) => format!("Trash emptied, {} todo(s) deleted permanently", count),
            Message::TrashAlreadyEmpty => "Trash is already empty".to_string(),
            Message::IdsRequired => "ids are required".to_string(),

            // === FILTER LABELS ===
            Message::FilterAll => "All tasks".to_string(),
            Message::FilterChecked => "Completed tasks".to_string(),
            Message::FilterUnchecked => "Current tasks".to_string(),
            Message::FilterRemoved => "Trash".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleClient => "Client settings".to_string(),
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptServerHost => "Host to bind the API server to".to_string(),
            Message::PromptServerPort => "Port to bind the API server to".to_string(),
            Message::PromptClientApiUrl => "Base URL of the ticklist API".to_string(),
            Message::PromptClientDebounce => "Delay before an edit is sent to the server (ms)".to_string(),
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD", input),

            // === SERVER MESSAGES ===
            Message::ServerStarting => "Starting ticklist API server".to_string(),
            Message::ServerListening(address) => format!("Listening on {}", address),
            Message::ServerStopped => "Server shutdown complete".to_string(),
            Message::ServerReceivedCtrlC => "Received Ctrl+C, initiating graceful shutdown".to_string(),
            Message::ServerReceivedSigterm => "Received SIGTERM, initiating graceful shutdown".to_string(),
            Message::InvalidServerAddress(address) => format!("Invalid server address: {}", address),

            // === API MESSAGES ===
            Message::RemoteUpdateFailed(id, error) => format!("Failed to save todo #{}: {}", id, error),
            Message::RemoteDeleteFailed(error) => format!("Failed to empty trash on the server: {}", error),

            // === FILE SYSTEM MESSAGES ===
            Message::DataStoragePathError => "Failed to resolve the data storage directory".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_required_is_passed_through_verbatim() {
        assert_eq!(Message::IdsRequired.to_string(), "ids are required");
    }

    #[test]
    fn filter_labels() {
        assert_eq!(Message::FilterAll.to_string(), "All tasks");
        assert_eq!(Message::FilterRemoved.to_string(), "Trash");
    }

    #[test]
    fn interpolates_values() {
        assert_eq!(Message::TrashEmptied(3).to_string(), "Trash emptied, 3 todo(s) deleted permanently");
        assert_eq!(Message::TodoNotFound(4).to_string(), "Todo #4 not found");
        assert_eq!(Message::TodoIsDone(5).to_string(), "Todo #5 is done; uncheck it to edit");
        assert_eq!(Message::TodoInTrash(6).to_string(), "Todo #6 is in the trash; restore it to edit");
    }
}
