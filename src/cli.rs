use clap::Parser;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "vimv")]
#[command(version, about = "Batch-rename files by editing their names in a text editor", long_about = None)]
pub struct Cli {
    /// Which editor to use (defaults to the configured editor, then vim)
    #[arg(short, long, value_name = "PROGRAM")]
    pub editor: Option<String>,

    /// Show the character diff of every rename before the first prompt
    #[arg(long)]
    pub diff: bool,

    /// Print configuration values and exit
    #[arg(long)]
    pub print_config: bool,

    /// Files to rename (defaults to every entry in the current directory)
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_editor_and_files() {
        let cli = Cli::parse_from(["vimv", "--editor", "nano", "a.txt", "b.txt"]);
        assert_eq!(cli.editor.as_deref(), Some("nano"));
        assert_eq!(cli.files, vec!["a.txt".to_string(), "b.txt".to_string()]);
        assert!(!cli.diff);
    }

    #[test]
    fn test_no_files_means_current_directory() {
        let cli = Cli::parse_from(["vimv", "-e", "vi"]);
        assert_eq!(cli.editor.as_deref(), Some("vi"));
        assert!(cli.files.is_empty());
    }
}
