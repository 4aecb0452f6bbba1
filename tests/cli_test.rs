use clap::Parser;
use gobundle::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("gobundle")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&["a.txt", "b.txt"])).unwrap();

    assert_eq!(parsed.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    assert_eq!(parsed.out, None);
    assert_eq!(parsed.prefix, "");
    assert!(!parsed.use_const);
    assert_eq!(parsed.pkg, None);
    assert!(!parsed.full_name);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--out",
        "assets_gen.go",
        "--prefix",
        "asset",
        "--const",
        "--pkg",
        "assets",
        "--full-name",
        "--verbose",
        "a.txt",
    ]))
    .unwrap();

    assert_eq!(parsed.out, Some(PathBuf::from("assets_gen.go")));
    assert_eq!(parsed.prefix, "asset");
    assert!(parsed.use_const);
    assert_eq!(parsed.pkg, Some("assets".to_string()));
    assert!(parsed.full_name);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed =
        Args::try_parse_from(make_args(&["-o", "out.go", "-p", "x", "-c", "-v", "a.txt"]))
            .unwrap();

    assert_eq!(parsed.out, Some(PathBuf::from("out.go")));
    assert_eq!(parsed.prefix, "x");
    assert!(parsed.use_const);
    assert!(parsed.verbose);
}

#[test]
fn test_zero_files_is_accepted() {
    let parsed = Args::try_parse_from(make_args(&["--pkg", "assets"])).unwrap();
    assert!(parsed.files.is_empty());
}
