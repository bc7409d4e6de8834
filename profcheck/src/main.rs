use profcheck::io::RegularOutput;

fn main() {
    let args = std::env::args().collect::<Vec<String>>();
    let args_refs = args.iter().map(|s| s.as_str()).collect::<Vec<&str>>();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    std::process::exit(profcheck::main_with_args(
        args_refs.as_slice(),
        &mut RegularOutput {
            stdout_lock: stdout.lock(),
            stderr_lock: stderr.lock(),
        },
    ));
}
