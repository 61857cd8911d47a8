fn main() {
    if let Err(e) = cpfe_drv::main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
