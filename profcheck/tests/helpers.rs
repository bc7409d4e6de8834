pub mod prelude {
    extern crate profcheck;
    extern crate tempfile;

    pub use self::profcheck::io::CursorOutput;
    pub use self::profcheck::main_with_args;
    pub use self::tempfile::TempDir;
    use std::fs;

    /// Creates a temporary data directory holding one file per `(name, contents)` pair.
    pub fn profile_dir(profiles: &[(&str, &str)]) -> TempDir {
        let dir = self::tempfile::tempdir().unwrap();
        for (name, contents) in profiles {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    pub fn run(args: &[&str]) -> (i32, CursorOutput) {
        let mut output = CursorOutput::new();
        let code = main_with_args(args, &mut output);
        (code, output)
    }

    pub fn run_in(dir: &TempDir, extra: &[&str]) -> (i32, CursorOutput) {
        let data_dir = dir.path().to_str().unwrap().to_string();
        let mut args = vec!["profcheck", "--data-dir", data_dir.as_str()];
        args.extend_from_slice(extra);
        run(&args)
    }
}
