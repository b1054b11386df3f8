extern crate aeon_wasm;
extern crate clap;
extern crate env_logger;

use std::process;
use std::io::{self, Read};
use std::fs::File;
use std::num::ParseIntError;
use std::path::Path;

use clap::{App, Arg, ArgMatches};

use aeon_wasm::{Config, Runtime};

#[derive(Debug)]
pub enum Error {
    IoError(io::Error),
    ParseIntError(ParseIntError),
    WasmError(aeon_wasm::Error),
}

impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self {
        Error::IoError(other)
    }
}

impl From<ParseIntError> for Error {
    fn from(other: ParseIntError) -> Self {
        Error::ParseIntError(other)
    }
}

impl From<aeon_wasm::Error> for Error {
    fn from(other: aeon_wasm::Error) -> Self {
        Error::WasmError(other)
    }
}

pub fn main() {
    env_logger::init();
    let matches = App::new("aeon-interp")
        .arg(Arg::with_name("path")
            .required(true))
        .arg(Arg::with_name("function")
            .required(true))
        .arg(Arg::with_name("args")
            .multiple(true)
            .allow_hyphen_values(true))
        .arg(Arg::with_name("stack-size")
            .long("stack-size")
            .takes_value(true))
        .arg(Arg::with_name("exports").long("exports"))
        .get_matches();

    if let Err(e) = run(matches) {
        match e {
            Error::WasmError(e) => eprintln!("Error: {}", e),
            e => eprintln!("Error: {:?}", e),
        }
        process::exit(1);
    }
}

fn load_file(path: &Path) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path)?;
    let mut data: Vec<u8> = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

pub fn run(matches: ArgMatches) -> Result<(), Error> {
    let path = Path::new(matches.value_of("path").unwrap_or_default());
    let data = load_file(path)?;

    let mut cfg = Config::default();
    if let Some(size) = matches.value_of("stack-size") {
        cfg.stack_size = size.parse()?;
    }

    let rt = Runtime::with_config(cfg, &data)?;

    if matches.is_present("exports") {
        let m = rt.module();
        for e in m.exports() {
            if let Some(t) = m.function_type(e.function_index) {
                println!("{}: func[{}] params: {} results: {}", e.name, e.function_index, t.params.len(), t.results.len());
            }
        }
    }

    let name = matches.value_of("function").unwrap_or_default();
    let mut args: Vec<i32> = Vec::new();
    if let Some(values) = matches.values_of("args") {
        for v in values {
            args.push(v.parse()?);
        }
    }

    let result = rt.invoke(name, &args)?;
    println!("{}({}) => {}", name, args.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", "), result);
    Ok(())
}
