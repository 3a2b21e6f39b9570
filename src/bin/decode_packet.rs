use rf::base::remote_type::RemoteType;
use rf::formatter::decoder::{radio_payload, PacketDecoder};
use rf::formatter::settings::FormatterSettings;
use rf::utils::hex::parse_hex;
use rf_remote_tools as rf;
use tokio::io::{AsyncBufReadExt, BufReader};

extern crate clap;
use clap::{Arg, ArgAction, Command};
use log::{error, warn};

fn decode_line(decoder: &mut PacketDecoder, line: &str, raw: bool) {
    let bytes = match parse_hex(line) {
        Ok(b) => b,
        Err(e) => {
            warn!("Ignoring '{}': {}", line, e);
            return;
        }
    };
    if bytes.is_empty() {
        return;
    }
    let payload = if raw {
        Some(&bytes[..])
    } else {
        radio_payload(&bytes)
    };
    let Some(payload) = payload else {
        println!("Truncated frame");
        return;
    };
    let Some(formatter) = decoder.find(payload) else {
        println!("Unknown packet");
        return;
    };
    if let Ok(dump) = formatter.format_packet(payload) {
        print!("{}", dump);
    }
    if let Some(decoded) = decoder.decode(payload) {
        match serde_json::to_string(&decoded) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize result: {}", e),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let matches = Command::new("decode_packet")
        .about("Decode received RF remote packets.")
        .arg(
            Arg::new("PACKET")
                .num_args(0..)
                .help("Hex encoded packets. Read from stdin, one per line, if none are given."),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .help("Packets have no leading length byte"),
        )
        .get_matches();

    let raw = matches.get_flag("raw");
    let remote_types: Vec<RemoteType> = RemoteType::all()
        .filter(|t| t.protocol().is_some())
        .collect();
    let mut decoder =
        match PacketDecoder::with_remote_types(&remote_types, &FormatterSettings::default()) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Failed to set up decoder: {}", e);
                return;
            }
        };

    if let Some(packets) = matches.get_many::<String>("PACKET") {
        for p in packets {
            decode_line(&mut decoder, p, raw);
        }
        return;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => decode_line(&mut decoder, &line, raw),
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }
    }
}
