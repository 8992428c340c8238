mod args;
mod config;
mod reader;
mod writer;

use acl::{input::CommandRecord, services::CommandService, Result};

use std::io;
use std::path::Path;

use writer::ReplyWriter;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning replay...");

    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let service = acl::build_command_service();

    let processed = replay_commands(&input_path, &service)?;

    log::debug!("Replayed {processed} commands. Application finished successfully!");

    Ok(())
}

/// Read every command row, apply it to the ledger, and write one reply per accepted row to stdout
fn replay_commands(input_path: &Path, service: &CommandService) -> Result<usize> {
    let mut rdr = reader::build_command_reader(input_path)?;
    let mut wtr = ReplyWriter::new(io::stdout().lock());

    let mut processed = 0;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<CommandRecord>() {
        log::debug!("Parsing record into CommandRecord: {record:?}");
        let command_record = match record {
            Ok(command_record) => command_record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing command_record into LedgerCommand: {command_record:?}");
        let command = match command_record.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let reply = service.process(command)?;

        wtr.write(&reply)?;
        processed += 1;
    }

    Ok(processed)
}
