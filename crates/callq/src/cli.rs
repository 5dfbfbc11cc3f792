use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("callq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Call-center simulator: receive calls into a queue, answer them onto a stack")
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress log output on stderr")
                .action(ArgAction::SetTrue),
        )
}
