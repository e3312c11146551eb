fn main() {
    letter_snap::run();
}
