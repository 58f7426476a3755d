use clap::{value_parser, Arg, ArgAction, Command};

pub fn parse_args() -> Command {
    Command::new("agps")
        .author(clap::crate_authors!())
        .about("Convert GPS broadcast ephemerides to and from A-GPS wire structs")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(
            Command::new("encode")
                .about("Encode navigation records (JSON) into hex wire structs, one per line")
                .arg(
                    Arg::new("records")
                        .value_name("FILE")
                        .required(true)
                        .help("JSON file holding one navigation record or an array of them, '-' for stdin"),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode a hex wire struct and print it as JSON")
                .arg(
                    Arg::new("hex")
                        .value_name("HEX")
                        .required(true)
                        .help("124 hex digits, the 62 byte struct"),
                )
                .arg(
                    Arg::new("physical")
                        .long("physical")
                        .action(ArgAction::SetTrue)
                        .help("Scale raw integers back to physical units"),
                ),
        )
        .subcommand(
            Command::new("rebase")
                .about("Place a time of week in the week of a base epoch")
                .arg(
                    Arg::new("tow")
                        .long("tow")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Time of week to rebase, in seconds"),
                )
                .arg(
                    Arg::new("week")
                        .long("week")
                        .required(false)
                        .requires("base-tow")
                        .value_parser(value_parser!(i64))
                        .help("Week of the base epoch. Defaults to the current GPS time"),
                )
                .arg(
                    Arg::new("base-tow")
                        .long("base-tow")
                        .required(false)
                        .requires("week")
                        .value_parser(value_parser!(i64))
                        .help("Time of week of the base epoch, in seconds"),
                ),
        )
        .subcommand(
            Command::new("ura")
                .about("Map a user range accuracy in meters to its URA index")
                .arg(
                    Arg::new("meters")
                        .value_name("METERS")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                ),
        )
}
