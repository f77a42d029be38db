fn main() {
    apigen_cli::init_tracing();
    std::process::exit(apigen_cli::run_cli(std::env::args_os()));
}
