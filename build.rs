use std::{
    env, fs,
    path::{Path, PathBuf},
};

fn main() {
    // 1) Handle memory.x and firmware link arguments based on target
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv8m") {
        // Pico 2 ARM: copy our custom memory-pico2.x to OUT_DIR as memory.x
        install_memory_x("memory-pico2.x", &out_dir);
        link_firmware(&["-Tlink.x", "-Tdefmt.x"]);
    } else if target.starts_with("thumbv6m") {
        // Pico 1: copy our custom memory-pico1.x to OUT_DIR as memory.x
        install_memory_x("memory-pico1.x", &out_dir);
        link_firmware(&["-Tlink.x", "-Tlink-rp.x", "-Tdefmt.x"]);
    }

    // 2) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");

    // 3) Provide a fallback so the crate compiles without .env
    let tick_ms = env_or_default("MORSE_TICK_MS", "500");
    if tick_ms.is_empty() || !tick_ms.bytes().all(|byte| byte.is_ascii_digit()) {
        println!("cargo:warning=MORSE_TICK_MS must be a whole number of milliseconds, got {tick_ms:?}");
    }

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=MORSE_TICK_MS={tick_ms}");

    // Optional: don't rebuild unless these change
    println!("cargo:rerun-if-env-changed=MORSE_TICK_MS");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=memory-pico1.x");
    println!("cargo:rerun-if-changed=memory-pico2.x");
}

fn install_memory_x(file: &str, out_dir: &Path) {
    let memory_x = fs::read_to_string(file).unwrap_or_else(|err| panic!("Failed to read {file}: {err}"));
    let dest = out_dir.join("memory.x");
    fs::write(&dest, memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
}

fn link_firmware(scripts: &[&str]) {
    println!("cargo:rustc-link-arg-examples=--nmagic");
    for script in scripts {
        println!("cargo:rustc-link-arg-examples={script}");
    }
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
