fn main() {
    std::process::exit(sphharm_cli::run_from_env());
}
