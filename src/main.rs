use showdata::config::env_loader::load_config;
use showdata::schedule::emitter::render_data_module;
use showdata::schedule::parser::parse_schedule;
use std::fs;
use tracing::info;

fn main() {
    tracing_subscriber::fmt::init();

    let config = load_config();

    let source = fs::read_to_string(&config.source_path)
        .unwrap_or_else(|err| panic!("Failed reading '{}': {}", config.source_path, err));

    let collection = parse_schedule(&source);
    let module = render_data_module(&collection);

    fs::write(&config.output_path, module)
        .unwrap_or_else(|err| panic!("Failed writing '{}': {}", config.output_path, err));

    info!("Extracted events for {} dates", collection.len());
    info!("Generated {}", config.output_path);
}
