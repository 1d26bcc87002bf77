use super::dataset::{Experiment, FluxPoint, Particle};
use std::io;
use std::path::Path;
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum ExportError {
    #[strum(to_string = "CSV export failed: {error}")]
    Csv { error: csv::Error },
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self { ExportError::Csv { error } }
}

impl From<io::Error> for ExportError {
    fn from(error: io::Error) -> Self { ExportError::Csv { error: csv::Error::from(error) } }
}

/// File name the explorer proposes for a download, e.g. `AMS-02_He_flux.csv`.
pub fn default_file_name(experiment: Experiment, particle: Particle) -> String {
    format!("{}_{}_flux.csv", experiment.query_name(), particle.code())
}

/// Writes `Energy (GeV/n),Flux` rows to any writer. The header is written even for an empty
/// spectrum.
///
/// # Errors
/// Propagates serialisation and I/O failures of the underlying writer.
pub fn write_csv<W: io::Write>(points: &[FluxPoint], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(["Energy (GeV/n)", "Flux"])?;
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the spectrum to `path`, replacing any existing file.
///
/// # Errors
/// See [`write_csv`]; creating the file may fail as well.
pub fn export_csv(points: &[FluxPoint], path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_csv(points, io::BufWriter::new(file))
}
