fn main() {
    bullet_stream::game::run();
}
