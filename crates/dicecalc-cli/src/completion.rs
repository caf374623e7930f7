//! Shell completion scripts for the `dicecalc` command line.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `cmd` to `out`.
///
/// The script completes the binary name `cmd` was built with, falling back
/// to its command name.
pub fn write_completion(
    cmd: &mut Command,
    shell: Shell,
    out: &mut dyn io::Write,
) -> io::Result<()> {
    let bin_name = cmd
        .get_bin_name()
        .unwrap_or_else(|| cmd.get_name())
        .to_owned();
    generate(shell, cmd, bin_name, out);
    out.flush()
}

#[cfg(test)]
mod tests {
    use clap::Arg;

    use super::*;

    fn dice_command() -> Command {
        Command::new("dicecalc")
            .arg(Arg::new("dice").short('n').long("dice"))
            .arg(Arg::new("trials").short('t').long("trials"))
    }

    fn script(shell: Shell, mut cmd: Command) -> String {
        let mut buf = Vec::new();
        write_completion(&mut cmd, shell, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn completes_dice_options() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            let out = script(shell, dice_command());
            assert!(out.contains("dicecalc"), "{shell}");
            assert!(out.contains("dice"), "{shell}");
            assert!(out.contains("trials"), "{shell}");
        }
    }

    #[test]
    fn bin_name_takes_precedence() {
        let out = script(Shell::Fish, dice_command().bin_name("dice-rounds"));
        assert!(out.contains("dice-rounds"));
    }
}
