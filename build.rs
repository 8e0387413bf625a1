fn main() {
    // Stamped into jointkit::BUILD_DATE and shown by the CLI at start-up
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
