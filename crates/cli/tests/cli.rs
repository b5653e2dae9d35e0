use assert_cmd::Command;
use serde_json::Value;

fn bookshelf() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env("BOOKSHELF_CONFIG_DIR", "/nonexistent/bookshelf-config")
        .env_remove("BOOKSHELF_ENV")
        .env_remove("PORT");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let output = bookshelf().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("settings"));
}

#[test]
fn settings_reflect_environment_overrides() {
    let output = bookshelf()
        .arg("settings")
        .env("PORT", "4321")
        .env("BOOKSHELF_DATABASE__USERNAME", "librarian")
        .env("BOOKSHELF_DATABASE__PASSWORD", "s3cret")
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["environment"], "local");
    assert_eq!(settings["server"]["port"], 4321);
    assert_eq!(settings["database"]["username"], "librarian");
    assert!(settings["database"].get("password").is_none());
}

#[test]
fn unknown_environment_fails() {
    let output = bookshelf()
        .arg("settings")
        .env("BOOKSHELF_ENV", "qa")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unsupported environment 'qa'"));
}
