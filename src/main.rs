fn main() {
    dayspace::app::cli::run();
}
