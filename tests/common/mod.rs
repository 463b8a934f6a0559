use assert_cmd::Command;

pub fn classboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("classboard").unwrap();
    cmd.env_remove("CLASSBOARD_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--today").arg("2024-03-10");
    cmd
}
