//! Load company profiles from a CSV file with a header row

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{FinancialProfile, ProfileRecord};
use crate::error::ProfileError;

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<FinancialProfile>, ProfileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = load_profiles_from_reader(file)?;
    log::info!("Loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

/// Load all profiles from any CSV reader.
/// The first invalid row aborts the load; nothing partial is returned.
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<FinancialProfile>, ProfileError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for (idx, result) in rdr.deserialize::<ProfileRecord>().enumerate() {
        let record = result?;
        profiles.push(record.validate_labeled(&format!("row {}", idx + 1))?);
    }

    if profiles.is_empty() {
        return Err(ProfileError::Empty);
    }
    Ok(profiles)
}

/// Select one company by exact name
pub fn find_company<'a>(
    profiles: &'a [FinancialProfile],
    name: &str,
) -> Result<&'a FinancialProfile, ProfileError> {
    profiles
        .iter()
        .find(|p| p.company_name == name)
        .ok_or_else(|| ProfileError::UnknownCompany(name.to_string()))
}
