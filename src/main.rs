use std::path::Path;
use tracing::error;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let input = Path::new("data/laptop.csv");
    let reports_dir = Path::new("reports");

    if let Err(e) = laptop_eda::run(input, reports_dir) {
        error!("Run aborted: {e}");
        std::process::exit(1);
    }
}
