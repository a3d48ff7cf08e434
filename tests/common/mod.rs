use assert_cmd::Command;
use std::path::Path;

pub fn newsboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("newsboard").unwrap();
    cmd.env_remove("NEWSBOARD_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `newsboard` inside `dir`
#[allow(dead_code)]
pub fn newsboard_in(dir: &Path) -> Command {
    let mut cmd = newsboard_cmd();
    cmd.current_dir(dir);
    cmd
}
