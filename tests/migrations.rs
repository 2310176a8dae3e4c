#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ticklist::db::db::Db;
    use ticklist::db::migrations::{get_db_version, needs_migration, MigrationManager};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("ticklist.db");
            MigrationTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.path).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_raw_connection_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.path).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len() as u32, manager.latest_version());
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_todos");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_is_idempotent(ctx: &mut MigrationTestContext) {
        drop(Db::open(&ctx.path).unwrap());
        let db = Db::open(&ctx.path).unwrap();

        let history = MigrationManager::new().get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len() as u32, MigrationManager::new().latest_version());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_trash_index_exists(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.path).unwrap();

        let count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_todos_removed'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
