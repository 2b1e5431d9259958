//! Sample input CSV users can fill in with their own companies

use std::io::Write;

use super::FIELD_NAMES;
use crate::error::ProfileError;

/// Two illustrative companies, one value per `FIELD_NAMES` column
const SAMPLE_ROWS: [[&str; 14]; 2] = [
    [
        "Example Company Ltd", "Kenya", "Manufacturing",
        "50000000", "8000000", "25000000", "5000000", "10000000", "1500000",
        "45", "no", "30", "75", "yes",
    ],
    [
        "Sample Corp", "Ghana", "Banking",
        "75000000", "15000000", "40000000", "8000000", "12000000", "2000000",
        "30", "no", "20", "45", "yes",
    ],
];

/// Write the header row plus sample rows as CSV
pub fn write_template<W: Write>(writer: W) -> Result<(), ProfileError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(FIELD_NAMES)?;
    for row in SAMPLE_ROWS {
        wtr.write_record(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
