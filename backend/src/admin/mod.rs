//! Administrative actions that write to the store: running the DDL script and
//! loading data. Unlike the report reads, their failures are returned to the
//! caller with a message.

pub mod ingest;
pub mod init_db;
