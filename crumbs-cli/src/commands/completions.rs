//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "crumbs";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("# Add to ~/.bashrc:");
                eprintln!("#   eval \"$(crumbs completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   crumbs completions zsh > ~/.zsh/completions/_crumbs");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!("#   crumbs completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   crumbs completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }
        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
