use clap::{Parser, Subcommand};

use photon_client::{Photon, config};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every device on the account and its connection state
    Devices,
    /// Report whether the configured device is online
    Connection,
    /// List the functions the device firmware registered
    Functions,
    /// List the variables the device firmware registered
    Variables,
    /// Read the value of a device variable
    Fetch { variable: String },
    /// Invoke a device function with a string argument
    Push {
        function: String,
        #[arg(default_value = "")]
        argument: String,
    },
    /// Flash a firmware source file to the device
    Flash { file: String },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = config::load_from_file(&args.config)?;
    env_logger::Builder::new()
        .parse_filters(config.log_level())
        .init();

    let photon = Photon::new(config.device(), config.access_token()).endpoint(config.api_url());

    match args.command {
        Command::Devices => {
            for device in photon.devices()? {
                if device.connected {
                    println!("{} is connected", device.name);
                } else {
                    println!("{} is not connected", device.name);
                }
            }
        }
        Command::Connection => println!("{}", photon.is_connected()?),
        Command::Functions => {
            for function in photon.functions()? {
                println!("{function}");
            }
        }
        Command::Variables => {
            for (name, kind) in photon.variables()? {
                println!("{name}: {kind}");
            }
        }
        Command::Fetch { variable } => println!("{}", photon.fetch(&variable)?),
        Command::Push { function, argument } => {
            println!("{}", photon.push(&function, &argument)?)
        }
        Command::Flash { file } => {
            let response = photon.flash(&file)?;
            println!("Message: {}", response.message);
            println!("Flash OK: {}", response.ok);
        }
    }
    Ok(())
}
