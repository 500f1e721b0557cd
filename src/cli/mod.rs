//! CLI interface and argument parsing
//!
//! The command line is a fixed option set plus free positionals:
//! `datadefender <command> [table1 [table2 ...]] [options]`. The first
//! positional selects the subcommand; the rest are candidate table names
//! forwarded to the workflow.

pub mod commands;

use clap::Parser;

/// DataDefender - data discovery, anonymization and synthesis tool
#[derive(Parser, Debug)]
#[command(name = "datadefender")]
#[command(version, about, long_about = None)]
#[command(
    override_usage = "datadefender anonymize|database-discovery|file-discovery|generate [options] [table1 [table2 ...]]"
)]
pub struct Cli {
    /// Anonymizer/generator property file
    #[arg(
        short = 'A',
        long = "anonymizer-properties",
        default_value = "anonymizer.properties"
    )]
    pub anonymizer_properties: String,

    /// Discover candidate column names for anonymization based on provided patterns
    #[arg(short = 'c', long = "columns")]
    pub columns: bool,

    /// Column discovery property file
    #[arg(
        short = 'C',
        long = "column-properties",
        default_value = "columndiscovery.properties"
    )]
    pub column_properties: String,

    /// Discover candidate columns for anonymization based on semantic algorithms
    #[arg(short = 'd', long = "data")]
    pub data: bool,

    /// Data discovery property file
    #[arg(
        short = 'D',
        long = "data-properties",
        default_value = "datadiscovery.properties"
    )]
    pub data_properties: String,

    /// Create a requirement file after discovery
    #[arg(short = 'r', long = "requirement")]
    pub requirement: bool,

    /// Database connection property file
    #[arg(
        short = 'P',
        long = "database-properties",
        default_value = "db.properties"
    )]
    pub database_properties: String,

    /// File discovery property file
    #[arg(
        short = 'F',
        long = "file-discovery-properties",
        default_value = "filediscovery.properties"
    )]
    pub file_discovery_properties: String,

    /// Enable debug output
    #[arg(long = "debug")]
    pub debug: bool,

    /// Subcommand followed by optional table names
    #[arg(value_name = "COMMAND")]
    pub args: Vec<String>,
}

impl Cli {
    /// Candidate table names (positionals after the command token).
    pub fn tables(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }
}

/// The four mutually exclusive workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Anonymize,
    DatabaseDiscovery,
    FileDiscovery,
    Generate,
}

impl Command {
    /// Resolve a positional token to a command; unknown tokens resolve to
    /// nothing and fall through to help.
    pub fn resolve(token: &str) -> Option<Self> {
        match token {
            "anonymize" => Some(Self::Anonymize),
            "database-discovery" => Some(Self::DatabaseDiscovery),
            "file-discovery" => Some(Self::FileDiscovery),
            "generate" => Some(Self::Generate),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Anonymize => "anonymize",
            Self::DatabaseDiscovery => "database-discovery",
            Self::FileDiscovery => "file-discovery",
            Self::Generate => "generate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["datadefender", "anonymize"]);
        assert_eq!(cli.database_properties, "db.properties");
        assert_eq!(cli.anonymizer_properties, "anonymizer.properties");
        assert_eq!(cli.column_properties, "columndiscovery.properties");
        assert_eq!(cli.data_properties, "datadiscovery.properties");
        assert_eq!(cli.file_discovery_properties, "filediscovery.properties");
        assert!(!cli.debug);
        assert!(!cli.requirement);
    }

    #[test]
    fn test_cli_parse_command_and_tables() {
        let cli = Cli::parse_from(["datadefender", "anonymize", "Users", "ORDERS"]);
        assert_eq!(cli.args[0], "anonymize");
        assert_eq!(cli.tables(), ["Users", "ORDERS"]);
    }

    #[test]
    fn test_cli_parse_no_positionals() {
        let cli = Cli::parse_from(["datadefender"]);
        assert!(cli.args.is_empty());
        assert!(cli.tables().is_empty());
    }

    #[test]
    fn test_cli_parse_discovery_flags() {
        let cli = Cli::parse_from(["datadefender", "-c", "-r", "database-discovery"]);
        assert!(cli.columns);
        assert!(!cli.data);
        assert!(cli.requirement);
    }

    #[test]
    fn test_cli_parse_property_overrides() {
        let cli = Cli::parse_from([
            "datadefender",
            "-P",
            "prod-db.properties",
            "-D",
            "prod-data.properties",
            "database-discovery",
        ]);
        assert_eq!(cli.database_properties, "prod-db.properties");
        assert_eq!(cli.data_properties, "prod-data.properties");
    }

    #[test]
    fn test_command_resolve() {
        assert_eq!(Command::resolve("anonymize"), Some(Command::Anonymize));
        assert_eq!(
            Command::resolve("database-discovery"),
            Some(Command::DatabaseDiscovery)
        );
        assert_eq!(
            Command::resolve("file-discovery"),
            Some(Command::FileDiscovery)
        );
        assert_eq!(Command::resolve("generate"), Some(Command::Generate));
        assert_eq!(Command::resolve("export"), None);
    }

    #[test]
    fn test_command_name_round_trip() {
        for cmd in [
            Command::Anonymize,
            Command::DatabaseDiscovery,
            Command::FileDiscovery,
            Command::Generate,
        ] {
            assert_eq!(Command::resolve(cmd.name()), Some(cmd));
        }
    }
}
