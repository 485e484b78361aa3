use std::env;
use std::process::ExitCode;

use rawhttp::client::Client;

fn usage(program: &str) {
    println!("{} [GET/POST] [URL]\n", program);
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("rawhttp");

    let (method, url) = match args.len() {
        0 | 1 => {
            usage(program);
            return ExitCode::FAILURE;
        }
        3 => (args[1].as_str(), args[2].as_str()),
        _ => ("GET", args[1].as_str()),
    };

    log::info!("{} {}", method, url);

    match Client::new().command(url, method, None) {
        Ok(response) => {
            println!("{}", response);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", program, e);
            ExitCode::FAILURE
        }
    }
}
