use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_commands(path: &Path, rows: &[&str]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "id", "type", "amount", "urgent"])?;

    for row in rows {
        wtr.write_record(row.split(','))?;
    }

    wtr.flush()?;
    Ok(())
}
