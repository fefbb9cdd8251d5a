mod app;
mod audio;
mod config;
mod directive;
mod error;
mod library;
mod playlist;
mod reconcile;
mod runtime;
mod search;

fn main() {
    if let Err(e) = runtime::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
