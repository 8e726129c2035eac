use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    towerup completions bash > ~/.bash_completion.d/towerup\n\n\
                  Generate zsh completions:\n    towerup completions zsh > ~/.zfunc/_towerup\n\n\
                  Generate fish completions:\n    towerup completions fish > ~/.config/fish/completions/towerup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
