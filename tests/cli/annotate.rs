use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const FOO: &str = "public struct Foo {\n}\n";

#[test]
fn test_annotate_public_struct() -> Result<()> {
    let test = CliTest::with_file("Sources/Foo.swift", FOO)?;

    let mut cmd = test.command();
    cmd.args(["--ios-version", "16.0"]);
    let (output, stdout) = run(cmd)?;

    assert!(output.status.success());
    assert!(stdout.contains("Found 1 Swift file(s) to process"));
    assert!(stdout.contains("Processing: Sources/Foo.swift"));
    assert!(stdout.contains("  Added @available to: public struct Foo {"));
    assert!(stdout.contains("Modified Sources/Foo.swift - added 1 @available annotation(s)"));
    assert!(stdout.contains("  Total annotations added: 1"));

    assert_snapshot!(test.read_file("Sources/Foo.swift")?, @r"
    @available(iOS 16.0, macOS 12.0, tvOS 16.0, watchOS 8.0, *)
    public struct Foo {
    }
    ");
    Ok(())
}

#[test]
fn test_second_run_is_noop() -> Result<()> {
    let test = CliTest::with_file("Sources/Foo.swift", FOO)?;

    let mut first = test.command();
    first.args(["--ios-version", "16.0"]);
    run(first)?;
    let after_first = test.read_file("Sources/Foo.swift")?;

    let mut second = test.command();
    second.args(["--ios-version", "16.0"]);
    let (output, stdout) = run(second)?;

    assert!(output.status.success());
    assert!(stdout.contains("No changes needed for Sources/Foo.swift"));
    assert!(stdout.contains("  Files modified: 0"));
    assert!(stdout.contains("  Total annotations added: 0"));
    assert_eq!(test.read_file("Sources/Foo.swift")?, after_first);
    Ok(())
}

#[test]
fn test_default_ios_version() -> Result<()> {
    let test = CliTest::with_file("Model.swift", "struct Model {}\n")?;

    run(test.command())?;

    assert_eq!(
        test.read_file("Model.swift")?,
        "@available(iOS 15.0, macOS 12.0, tvOS 15.0, watchOS 8.0, *)\nstruct Model {}\n"
    );
    Ok(())
}

#[test]
fn test_platform_version_overrides() -> Result<()> {
    let test = CliTest::with_file("Model.swift", "struct Model {}\n")?;

    let mut cmd = test.command();
    cmd.args([
        "--ios-version",
        "17.0",
        "--macos-version",
        "14.0",
        "--watchos-version",
        "10.0",
    ]);
    run(cmd)?;

    assert_eq!(
        test.read_file("Model.swift")?,
        "@available(iOS 17.0, macOS 14.0, tvOS 17.0, watchOS 10.0, *)\nstruct Model {}\n"
    );
    Ok(())
}

#[test]
fn test_dry_run_matches_apply() -> Result<()> {
    let content = "import Foundation\n\nstruct A {}\n\nextension A {\n    struct Inner {}\n}\n";
    let test = CliTest::with_file("A.swift", content)?;

    let mut dry = test.command();
    dry.arg("--dry-run");
    let (output, stdout) = run(dry)?;

    assert!(output.status.success());
    assert!(stdout.contains("DRY RUN MODE - No files will be modified"));
    assert!(stdout.contains("  Would add @available to: struct A {}"));
    assert!(stdout.contains("  Would add @available to: extension A {"));
    assert!(stdout.contains("Would modify A.swift - 2 @available annotation(s)"));
    assert!(stdout.contains("Run without --dry-run to apply changes."));
    assert_eq!(test.read_file("A.swift")?, content);

    let (_, stdout) = run(test.command())?;
    assert!(stdout.contains("Modified A.swift - added 2 @available annotation(s)"));

    assert_snapshot!(test.read_file("A.swift")?, @r"
    import Foundation

    @available(iOS 15.0, macOS 12.0, tvOS 15.0, watchOS 8.0, *)
    struct A {}

    @available(iOS 15.0, macOS 12.0, tvOS 15.0, watchOS 8.0, *)
    extension A {
        struct Inner {}
    }
    ");
    Ok(())
}

#[test]
fn test_conformance_extension_skipped() -> Result<()> {
    let content = "extension Foo: Bar {\n}\n";
    let test = CliTest::with_file("Foo.swift", content)?;

    let (_, stdout) = run(test.command())?;

    assert!(stdout.contains("  Total annotations added: 0"));
    assert_eq!(test.read_file("Foo.swift")?, content);
    Ok(())
}

#[test]
fn test_nested_struct_skipped() -> Result<()> {
    let content = "    struct Nested {\n    }\n";
    let test = CliTest::with_file("Nested.swift", content)?;

    let mut cmd = test.command();
    cmd.arg("--verbose");
    let (_, stdout) = run(cmd)?;

    assert!(stdout.contains("Skipped (not top-level) line 1: struct Nested {"));
    assert!(stdout.contains("  Total annotations added: 0"));
    assert_eq!(test.read_file("Nested.swift")?, content);
    Ok(())
}

#[test]
fn test_unreadable_file_does_not_fail_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("A.swift", [0xff, 0xfe, 0xfd])?;
    test.write_file("B.swift", "struct B {}\n")?;

    let (output, stdout) = run(test.command())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Error processing A.swift"));
    assert!(stdout.contains("Modified B.swift - added 1 @available annotation(s)"));
    assert!(stdout.contains("  Files failed: 1"));
    Ok(())
}

#[test]
fn test_strict_mode_exit_code() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("A.swift", [0xff, 0xfe, 0xfd])?;

    let mut cmd = test.command();
    cmd.arg("--strict");
    let (output, _) = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_strict_mode_success_without_failures() -> Result<()> {
    let test = CliTest::with_file("A.swift", "struct A {}\n")?;

    let mut cmd = test.command();
    cmd.arg("--strict");
    let (output, _) = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
