// file: src/cli/args.rs
// version: 1.0.0
// guid: 82758f57-df93-438f-bba5-635c9bdc05fb

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zoneadm-facts")]
#[command(about = "Gather facts about configured local zones on a Solaris global zone")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,

    #[arg(short, long, global = true, env = "ZONEADM_FACTS_CONFIG", help = "YAML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Seconds allowed for the zone listing command")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Search path used instead of PATH to find zoneadm")]
    pub search_path: Option<String>,

    #[arg(long, global = true, help = "Check mode; listing zones never changes the system")]
    pub check: bool,

    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Gather zone facts and print them as JSON (default)
    Facts,

    /// Print configured local zones as a table
    List {
        #[arg(short, long)]
        json: bool,

        #[arg(short, long, help = "Only show zones in this state")]
        status: Option<String>,
    },

    /// Parse captured `zoneadm list -i -c -v` output from a file or stdin
    Parse {
        #[arg(help = "File holding the captured output; stdin when omitted or `-`")]
        input: Option<PathBuf>,
    },

    /// Check that this host can list zones
    CheckPrereqs,
}

impl Cli {
    /// Subcommand to run, `facts` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Facts)
    }
}
