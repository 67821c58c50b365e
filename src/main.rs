fn main() {
    kingpin::cli::run();
}
