fn main() {
    exportmap::cmd::run();
}
