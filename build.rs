use std::process::Command;

fn main() {
    println!("cargo:rustc-env=BUILD_DATE={}", command_output("date", &["-u", "+%Y-%m-%d"]));
    println!(
        "cargo:rustc-env=GIT_COMMIT={}",
        command_output("git", &["rev-parse", "--short", "HEAD"])
    );
    println!("cargo:rerun-if-changed=.git/HEAD");
}

/// Trimmed stdout of a command, or "unknown" if it is unavailable or fails.
fn command_output(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
