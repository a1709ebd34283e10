use crate::config::model::Config;
use std::env;

const DEFAULT_SOURCE_PATH: &str = "../src/main.tsx";
const DEFAULT_OUTPUT_PATH: &str = "data.js";

pub fn load_config() -> Config {
    Config {
        source_path: load_path_config("SHOWDATA_SOURCE_PATH", DEFAULT_SOURCE_PATH),
        output_path: load_path_config("SHOWDATA_OUTPUT_PATH", DEFAULT_OUTPUT_PATH),
    }
}

fn load_path_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
