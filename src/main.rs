fn main() {
    if let Err(e) = collection_quiz::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
