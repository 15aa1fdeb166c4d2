use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let git_hash = command_stdout("git", &["rev-parse", "--short", "HEAD"]);
    println!("cargo:rustc-env=AGRO_CORE_BUILD_HASH={git_hash}");

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=AGRO_CORE_BUILD_TIMESTAMP={timestamp}");

    for (key, var) in [
        ("TARGET", "AGRO_CORE_BUILD_TARGET"),
        ("PROFILE", "AGRO_CORE_BUILD_PROFILE"),
    ] {
        let value = env::var(key).unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env={var}={value}");
    }
}

fn command_stdout(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
