use std::io;

use esxx_launcher::args::{build_launch_spec, collect_raw_args};
use esxx_launcher::config::LauncherConfig;
use esxx_launcher::logging::init_tracing;
use esxx_launcher::process::{run, SystemLauncher};
use esxx_launcher::{LaunchError, LauncherIdentity};

fn main() {
    init_tracing();

    let raw_args = collect_raw_args(std::env::args_os().skip(1));

    let code = match LauncherIdentity::current() {
        Ok(identity) => {
            let overlay = LauncherConfig::load(&identity);
            let spec = build_launch_spec(&identity, &raw_args, &overlay, |name| {
                std::env::var(name).ok()
            });
            run(&spec, &SystemLauncher, &mut io::stdout(), &mut io::stderr())
        }
        Err(e) => {
            let err = LaunchError::from(e);
            eprintln!("{err}");
            err.exit_code()
        }
    };

    std::process::exit(code);
}
