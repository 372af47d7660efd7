use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    promoter completions bash > ~/.bash_completion.d/promoter\n\n\
                  Generate zsh completions:\n    promoter completions zsh > ~/.zfunc/_promoter\n\n\
                  Generate fish completions:\n    promoter completions fish > ~/.config/fish/completions/promoter.fish\n\n\
                  Generate PowerShell completions:\n    promoter completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
