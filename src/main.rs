fn main() {
    if let Err(err) = csv_quality::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
