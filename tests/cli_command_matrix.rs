use assert_cmd::Command;

fn run_help(args: &[&str]) {
    let mut cmd = Command::cargo_bin("labcheck").unwrap();
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    // top-level
    run_help(&[]);

    run_help(&["images"]);
    run_help(&["rewrite"]);
    run_help(&["cases"]);
    run_help(&["pairs"]);
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("labcheck")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}
