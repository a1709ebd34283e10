#[derive(Debug)]
pub struct Config {
    pub source_path: String,
    pub output_path: String,
}
