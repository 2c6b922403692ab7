use std::process::Command;

fn git(repo_root: &str, args: &[&str]) -> Option<String> {
    let out = Command::new("git")
        .args(["-C", repo_root])
        .args(args)
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!s.is_empty()).then_some(s)
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo_root = format!("{manifest_dir}/..");

    // "v0.1.0-3-gabc1234-dirty" on tagged trees, "abc1234" otherwise
    let version = git(&repo_root, &["describe", "--tags", "--always", "--dirty"])
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=MYBANK_GIT_VERSION={version}");
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/index");
}
