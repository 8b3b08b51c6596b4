fn main() {
    s2d_deploy::app::cli::run();
}
