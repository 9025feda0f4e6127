fn main() {
    marketinsight::app::cli::run();
}
