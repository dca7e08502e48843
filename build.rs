use std::env;
use std::fs;
use std::path::Path;

/// Variables que la app lee con `option_env!` (ver src/config.rs)
const FORWARDED_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "SESSION_MAX_AGE_HOURS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=Sin archivo .env, se usan los valores por defecto (ver .env.example)");
            return;
        }
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !FORWARDED_KEYS.contains(&key) {
            println!("cargo:warning=Variable {} del .env ignorada", key);
            continue;
        }
        // El entorno real manda sobre el .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
