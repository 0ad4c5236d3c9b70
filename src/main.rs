fn main() {
    std::process::exit(authscan::app::startup::startup());
}
