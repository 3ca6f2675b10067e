// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager and ICU expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's Windows font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
