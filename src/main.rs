use billflow::application::engine::BillingEngine;
use billflow::infrastructure::csv::CsvReportingSink;
use billflow::interfaces::csv::audit_writer::AuditWriter;
use billflow::interfaces::csv::command_reader::{Command, CommandReader};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input commands CSV file
    input: PathBuf,

    /// Directory where invoice and daily-log files are written
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sink = CsvReportingSink::new(&cli.data_dir).into_diagnostic()?;
    let mut engine = BillingEngine::new(Box::new(sink));

    // Drain the command stream
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(Command::Submit(request)) => engine.submit(request),
            Ok(Command::Process) => match engine.process_next().await {
                Ok(id) => println!("processed {}", id),
                Err(e) => eprintln!("Error processing request: {}", e),
            },
            Ok(Command::Undo) => match engine.reverse_last() {
                Ok(id) => println!("reversed {}", id),
                Err(e) => eprintln!("Error reversing request: {}", e),
            },
            Ok(Command::Export) => match engine.export_history().await {
                Ok(count) => println!("daily log written ({} entries)", count),
                Err(e) => eprintln!("Error exporting history: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    // Output final processed history
    let stdout = io::stdout();
    let mut writer = AuditWriter::new(stdout.lock());
    writer.write_history(engine.history()).into_diagnostic()?;

    Ok(())
}
