use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_build_with_overrides() {
    let cli = Cli::try_parse_from([
        "rl",
        "build",
        "--source",
        "extract.csv",
        "--batch-size",
        "25",
    ])
    .unwrap();

    match &cli.command {
        Commands::Build(args) => {
            assert_eq!(args.source.as_deref(), Some("extract.csv"));
            assert_eq!(args.batch_size, Some(25));
        }
        other => panic!("expected build, got {:?}", other),
    }
}

#[test]
fn test_parse_load_range() {
    let cli = Cli::try_parse_from(["rl", "load", "--from", "3", "--to", "7"]).unwrap();

    match &cli.command {
        Commands::Load(args) => {
            assert_eq!(args.from, Some(3));
            assert_eq!(args.to, Some(7));
            assert!(!args.dry_run);
        }
        other => panic!("expected load, got {:?}", other),
    }
}

#[test]
fn test_global_config_flag() {
    let cli = Cli::try_parse_from(["rl", "load", "--config", "custom.yml"]).unwrap();
    assert_eq!(cli.global.config, "custom.yml");
}
