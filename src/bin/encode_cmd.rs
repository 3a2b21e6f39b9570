use rf::base::bulb_id::BulbId;
use rf::base::group::Group;
use rf::base::remote_type::RemoteType;
use rf::base::status::Status;
use rf::formatter::packet::Packet;
use rf::formatter::packet_formatter::PacketFormatter;
use rf::formatter::settings::{self, FormatterSettings};
use rf::state::group_state::{GroupState, MemoryStateStore};
use rf::utils::hex::parse_hex;
use rf_remote_tools as rf;

extern crate clap;
use clap::{value_parser, Arg, Command};
use log::{debug, error};

fn parse_device_id(s: &str) -> Result<u16, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("Invalid device id: {}", e))
}

fn main() {
    tracing_subscriber::fmt::init();
    let matches = Command::new("encode_cmd")
        .about("Build RF remote packets for a command.")
        .arg(
            Arg::new("ACTION")
                .required(true)
                .help("on, off, brightness, temperature, level_up, level_down, temperature_up, temperature_down or raw"),
        )
        .arg(
            Arg::new("VALUE")
                .required(false)
                .help("Value for brightness/temperature (0 - 100) or hex command byte for raw"),
        )
        .arg(
            Arg::new("remote")
                .short('r')
                .long("remote")
                .value_parser(value_parser!(RemoteType))
                .default_value("casalux")
                .help("Remote type"),
        )
        .arg(
            Arg::new("device")
                .short('d')
                .long("device")
                .value_parser(parse_device_id)
                .required(true)
                .help("Device id, hex"),
        )
        .arg(
            Arg::new("group")
                .short('g')
                .long("group")
                .value_parser(value_parser!(Group))
                .default_value("1")
                .help("Group 1 - 4 or all"),
        )
        .arg(
            Arg::new("brightness")
                .long("brightness")
                .value_parser(value_parser!(u8))
                .help("Last known brightness"),
        )
        .arg(
            Arg::new("kelvin")
                .long("kelvin")
                .value_parser(value_parser!(u8))
                .help("Last known colour temperature"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Formatter settings, JSON"),
        )
        .get_matches();

    let remote_type = *matches.get_one::<RemoteType>("remote").unwrap();
    let device_id = *matches.get_one::<u16>("device").unwrap();
    let group = *matches.get_one::<Group>("group").unwrap();
    let action = matches.get_one::<String>("ACTION").unwrap();
    let value = matches.get_one::<String>("VALUE");

    let settings = match matches.get_one::<String>("config") {
        Some(path) => match settings::load(path) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to load settings from {}: {}", path, e);
                return;
            }
        },
        None => FormatterSettings::default(),
    };
    debug!("Settings: {:?}", settings);

    let mut formatter = match PacketFormatter::for_remote_type(remote_type, settings) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    formatter.prepare(device_id, group);

    let mut known = GroupState::new();
    known.brightness = matches.get_one::<u8>("brightness").copied();
    known.kelvin = matches.get_one::<u8>("kelvin").copied();
    let mut store = MemoryStateStore::new();
    store.set(BulbId::new(device_id, group, remote_type), known);

    let level = || -> Option<u8> {
        let v = value?;
        match v.parse::<u8>() {
            Ok(l) if l <= 100 => Some(l),
            _ => {
                eprintln!("Value out of range: {}", v);
                None
            }
        }
    };

    let packets: Vec<Packet> = match action.as_str() {
        "on" => vec![formatter.update_status(Status::On, group)],
        "off" => vec![formatter.update_status(Status::Off, group)],
        "level_up" => vec![formatter.increase_brightness()],
        "level_down" => vec![formatter.decrease_brightness()],
        "temperature_up" => vec![formatter.increase_temperature()],
        "temperature_down" => vec![formatter.decrease_temperature()],
        "brightness" => match level() {
            Some(l) => formatter.update_brightness(l, &store),
            None => return,
        },
        "temperature" => match level() {
            Some(l) => formatter.update_temperature(l, &store),
            None => return,
        },
        "raw" => match value.map(|v| parse_hex(v)) {
            Some(Ok(bytes)) if bytes.len() == 1 => vec![formatter.command(bytes[0], 0)],
            _ => {
                eprintln!("raw needs a single hex command byte");
                return;
            }
        },
        a => {
            eprintln!("Unknown action '{}'", a);
            return;
        }
    };

    for p in &packets {
        println!("{}", p);
        match formatter.format_packet(p.as_bytes()) {
            Ok(dump) => print!("{}", dump),
            Err(e) => eprintln!("{}", e),
        }
    }
}
