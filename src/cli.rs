use clap::Parser;

#[derive(Parser)]
#[command(
    name = "logtint",
    about = "Wraps a command (or piped stdin) and colorizes its log output line by line",
    version = "0.1.0"
)]
pub struct Cli {
    /// Enable the SQL statement highlighter stage
    #[arg(long)]
    pub sql: bool,

    /// Do not forward the child's stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to spawn and highlight (reads stdin when omitted)
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}
