use std::process::exit;

fn main() {
    if let Err(err) = address_book::cli::run_app() {
        eprintln!("{err}");
        exit(1);
    }
}
