pub struct SQLikeMigrations;

impl SQLikeMigrations {
    pub fn create_entities() -> &'static [&'static str] {
        &[
            "CREATE TABLE IF NOT EXISTS brett_entities (
                entity_type VARCHAR NOT NULL,
                id VARCHAR NOT NULL,
                data JSONB NOT NULL,
                PRIMARY KEY (entity_type, id)
        )",
        ]
    }
}
