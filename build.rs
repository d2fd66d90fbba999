use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!(
        "cargo:rustc-env=BUILD_VERSION={}",
        Utc::now().format("%Y%m%d.%H%M%S")
    );
}
