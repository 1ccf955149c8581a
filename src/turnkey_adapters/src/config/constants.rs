pub mod env {
    pub const ENV_PREFIX: &str = "TURNKEY";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const SETTINGS_FILE: &str = "settings";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const TOKEN_TTL_IN_SECONDS: i64 = 60 * 60 * 24;

    // OWASP baseline for Argon2id
    pub const HASHER_MEMORY_KIB: i64 = 19 * 1024;
    pub const HASHER_ITERATIONS: i64 = 2;
    pub const HASHER_PARALLELISM: i64 = 1;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
