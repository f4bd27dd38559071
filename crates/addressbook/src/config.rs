use clap::{Parser, ValueEnum};

/// Process configuration.
///
/// The Lambda runtime starts the binary without arguments, so in practice
/// every value comes from the environment or falls back to its default.
#[derive(Parser, Debug, Clone)]
#[command(name = "addressbook")]
#[command(version, about = "Address book contacts service", long_about = None)]
pub struct Config {
    /// DynamoDB table holding the contacts
    #[arg(long, default_value = "contacts", env = "CONTACTS_TABLE")]
    pub table_name: String,

    /// AWS region of the contacts table. Only read by the DynamoDB backend
    #[arg(long, default_value = "us-east-2", env = "CONTACTS_REGION")]
    pub region: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Json, env = "LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines, for local runs.
    Text,
    /// One JSON object per line, for CloudWatch.
    Json,
}
