//! Schema 迁移

use dadamda_adapter_postgres::Migration;

pub fn migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "create_users",
            include_str!("../../../migrations/0001_create_users.sql"),
        ),
        Migration::new(
            2,
            "create_boards",
            include_str!("../../../migrations/0002_create_boards.sql"),
        ),
    ]
}
