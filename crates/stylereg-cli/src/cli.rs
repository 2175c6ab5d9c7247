//! CLI definitions for stylereg.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "stylereg")]
#[command(about = "Print and inspect ANSI style sequences")]
#[command(version)]
pub struct Cli {
    /// Log register construction to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Load extra registers from YAML or JSON definitions
    #[arg(long = "config", short = 'c', global = true, value_name = "FILE")]
    pub configs: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render style expressions
    #[command(long_about = "Render one or more style expressions.

Terms are <register>.<value> joined with '+'. A value is a style name,
an 8-bit index, an r,g,b triple or #rrggbb.

EXAMPLES:
    stylereg show fg.red+ef.bold
    stylereg show bg.196 --text 'alert'
    stylereg show ul.curly+ul.255,0,0 --escaped")]
    Show {
        /// Style expressions, rendered in order
        #[arg(required = true)]
        exprs: Vec<String>,
        /// Wrap this text and reset everything after it
        #[arg(long, short)]
        text: Option<String>,
        /// Print ESC as \x1b instead of the raw byte
        #[arg(long, short)]
        escaped: bool,
    },

    /// List the styles of a register
    List {
        /// Register name (ef, fg, bg, ul, rs, or one loaded with --config)
        register: String,
        /// Print sequences as \x1b text instead of samples
        #[arg(long, short)]
        escaped: bool,
    },

    /// Validate a register definition file
    Check {
        /// YAML or JSON register definition
        file: PathBuf,
    },
}
