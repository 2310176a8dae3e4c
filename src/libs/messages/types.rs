/// Every user-facing string the application prints or returns.
///
/// Variants carry the values they interpolate; the text itself lives in the
/// `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoCreated(i64),
    TodoUpdated(i64),
    TodoChecked(i64),
    TodoUnchecked(i64),
    TodoRemoved(i64),
    TodoRestored(i64),
    TodoNotFound(i64),
    TodoIsDone(i64),
    TodoInTrash(i64),
    TodoSubmitIgnored,
    TodosNotFound,
    TrashEmptied(usize),
    TrashAlreadyEmpty,
    IdsRequired,

    // === FILTER LABELS ===
    FilterAll,
    FilterChecked,
    FilterUnchecked,
    FilterRemoved,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleClient,
    PromptSelectModules,
    PromptServerHost,
    PromptServerPort,
    PromptClientApiUrl,
    PromptClientDebounce,
    InvalidDate(String),

    // === SERVER MESSAGES ===
    ServerStarting,
    ServerListening(String),
    ServerStopped,
    ServerReceivedCtrlC,
    ServerReceivedSigterm,
    InvalidServerAddress(String),

    // === API MESSAGES ===
    RemoteUpdateFailed(i64, String),
    RemoteDeleteFailed(String),

    // === FILE SYSTEM MESSAGES ===
    DataStoragePathError,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
