fn main() {
    let built = chrono::Utc::now().format("%Y-%m-%dT%H:%MZ").to_string();
    println!("cargo:rustc-env=BUILD_DATE={built}");
    println!("cargo:rerun-if-changed=build.rs");
}
