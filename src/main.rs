fn main() {
    brickfall::game::run();
}
