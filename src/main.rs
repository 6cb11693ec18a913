fn main() {
    suideploy::app::cli::run();
}
