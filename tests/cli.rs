use clap::Parser;
use pathjump::cli::{Cli, SubCmd};

#[test]
fn add_joins_path_with_spaces() {
    let cli = Cli::try_parse_from(["pj", "add", "docs", "/Users/me/My", "Docs"]).unwrap();
    match cli.command {
        Some(SubCmd::Add { alias, path }) => {
            assert_eq!(alias, "docs");
            assert_eq!(path, vec!["/Users/me/My", "Docs"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn subcommand_aliases_resolve() {
    let cli = Cli::try_parse_from(["pj", "cd", "proj"]).unwrap();
    assert!(matches!(cli.command, Some(SubCmd::Go { ref alias }) if alias == "proj"));

    let cli = Cli::try_parse_from(["pj", "del", "proj", "-y"]).unwrap();
    assert!(matches!(cli.command, Some(SubCmd::Rm { yes: true, .. })));

    let cli = Cli::try_parse_from(["pj", "find"]).unwrap();
    assert!(matches!(cli.command, Some(SubCmd::Ls { query: None })));
}

#[test]
fn bare_alias_is_not_a_subcommand() {
    let cli = Cli::try_parse_from(["pj", "proj"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.args, vec!["proj"]);
}

#[test]
fn incomplete_subcommand_fails_to_parse() {
    // 解析失败时 main 把原始参数当作别名跳转
    let err = Cli::try_parse_from(["pj", "rename", "proj"]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}
