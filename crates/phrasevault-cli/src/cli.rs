use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use phrasevault_core::VERSION;

/// Phrasevault - memorable passphrase generation and encrypted secret storage
#[derive(Parser)]
#[command(name = "phrasevault")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault file
    #[arg(short, long, global = true, env = "PHRASEVAULT_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new passphrase, optionally sealing a secret under it
    Generate(GenerateArgs),

    /// List stored records
    List(ListArgs),

    /// Show a specific record by ID
    Show(ShowArgs),

    /// Delete a record by ID
    Delete(DeleteArgs),

    /// Delete every record in the vault
    Clear(ClearArgs),

    /// Export records to a file
    Export(ExportArgs),

    /// Import records from a file
    Import(ImportArgs),

    /// Run a memory test for a stored passphrase
    Test(TestArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of words in the passphrase
    #[arg(short, long, default_value_t = 6)]
    pub length: usize,

    /// Title for the saved record (required to save)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Secret to encrypt under the passphrase (prefer --prompt-secret)
    #[arg(long, conflicts_with = "prompt_secret")]
    pub secret: Option<String>,

    /// Prompt for the secret interactively (hidden input)
    #[arg(long)]
    pub prompt_secret: bool,

    /// Print the passphrase without saving a record
    #[arg(long)]
    pub no_save: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Record ID (full hex ID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Decrypt and print the sealed secret
    #[arg(long)]
    pub reveal: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Record ID (full hex ID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long, visible_alias = "yes")]
    pub force: bool,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long, visible_alias = "yes")]
    pub force: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file (.json or .csv); stdout when omitted
    #[arg(value_name = "DEST")]
    pub destination: Option<String>,

    /// Output format (json, csv); inferred from the extension by default
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Source file (.json or .csv)
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Input format (json, csv); inferred from the extension by default
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `test` command
#[derive(Args)]
pub struct TestArgs {
    /// Record ID (full hex ID or prefix); a random record when omitted
    #[arg(value_name = "ID")]
    pub id: Option<String>,
}
