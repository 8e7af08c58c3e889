fn main() {
    std::process::exit(prompt_tuner::run())
}
